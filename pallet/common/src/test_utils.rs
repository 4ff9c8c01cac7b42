// Copyright 2022-2023 Futureverse Corporation Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
// You may obtain a copy of the License at the root of this project source code

/// Prelude to be used in mocks and tests, for ease of use
pub mod test_prelude {
	pub use crate::{test_utils::account_creation::*, *};
	pub use frame_support::{
		assert_err, assert_noop, assert_ok, assert_storage_noop, construct_runtime,
		dispatch::{DispatchError, DispatchResult},
		parameter_types,
		traits::GenesisBuild,
		weights::{constants::RocksDbWeight as DbWeight, Weight},
		PalletId,
	};
	pub use frame_system::{EnsureRoot, RawOrigin};
	pub use revshare_primitives::{
		test_utils::{TestExt, PAYMENT_ASSET_ID},
		roles, AccountId, AssetId, Balance, PaymentId, RoleId,
	};
	pub use sp_core::{H160, H256};
	pub use sp_runtime::{
		testing::Header,
		traits::{BlakeTwo256, IdentityLookup},
		DispatchError::BadOrigin,
		Permill,
	};
	pub use sp_std::{vec, vec::Vec};
}

/// Helper functions for creating accounts to be used in tests
pub mod account_creation {
	use revshare_primitives::AccountId;
	use sp_core::H160;

	/// Create an AccountId from a u64 seed
	pub fn create_account(seed: u64) -> AccountId {
		AccountId::from(H160::from_low_u64_be(seed))
	}

	/// Creates a random AccountId
	pub fn random_account() -> AccountId {
		AccountId::from(H160::random())
	}

	pub fn alice() -> AccountId {
		create_account(1000)
	}
	pub fn bob() -> AccountId {
		create_account(2000)
	}
	pub fn charlie() -> AccountId {
		create_account(3000)
	}
	pub fn dave() -> AccountId {
		create_account(4000)
	}
}

#[macro_export]
macro_rules! impl_frame_system_config {
	($test:ident) => {
		parameter_types! {
			pub const BlockHashCount: u64 = 250;
		}

		impl frame_system::Config for $test {
			type BaseCallFilter = frame_support::traits::Everything;
			type BlockWeights = ();
			type BlockLength = ();
			type RuntimeOrigin = RuntimeOrigin;
			type RuntimeCall = RuntimeCall;
			type Index = u64;
			type BlockNumber = u64;
			type Hash = H256;
			type Hashing = BlakeTwo256;
			type AccountId = AccountId;
			type Lookup = IdentityLookup<Self::AccountId>;
			type Header = Header;
			type RuntimeEvent = RuntimeEvent;
			type BlockHashCount = BlockHashCount;
			type DbWeight = ();
			type Version = ();
			type PalletInfo = PalletInfo;
			type AccountData = pallet_balances::AccountData<Balance>;
			type OnNewAccount = ();
			type OnKilledAccount = ();
			type SystemWeightInfo = ();
			type SS58Prefix = ();
			type OnSetCode = ();
			type MaxConsumers = frame_support::traits::ConstU32<16>;
		}
	};
}

#[macro_export]
macro_rules! impl_pallet_balance_config {
	($test:ident) => {
		parameter_types! {
			pub const MaxReserves: u32 = 50;
			pub const ExistentialDeposit: u128 = 1;
		}

		impl pallet_balances::Config for $test {
			type Balance = Balance;
			type RuntimeEvent = RuntimeEvent;
			type DustRemoval = ();
			type ExistentialDeposit = ExistentialDeposit;
			type AccountStore = System;
			type MaxLocks = ();
			type WeightInfo = ();
			type MaxReserves = MaxReserves;
			type ReserveIdentifier = [u8; 8];
		}
	};
}

#[macro_export]
macro_rules! impl_pallet_timestamp_config {
	($test:ident) => {
		parameter_types! {
			pub const MinimumPeriod: u64 = 5;
		}

		impl pallet_timestamp::Config for $test {
			type Moment = u64;
			type OnTimestampSet = ();
			type MinimumPeriod = MinimumPeriod;
			type WeightInfo = ();
		}
	};
}

#[macro_export]
macro_rules! impl_pallet_assets_config {
	($test:ident) => {
		parameter_types! {
			pub const AssetDeposit: Balance = 1_000_000;
			pub const AssetAccountDeposit: Balance = 16;
			pub const ApprovalDeposit: Balance = 1;
			pub const AssetsStringLimit: u32 = 50;
			pub const MetadataDepositBase: Balance = 1 * 68;
			pub const MetadataDepositPerByte: Balance = 1;
			pub const RemoveItemsLimit: u32 = 100;
		}

		impl pallet_assets::Config for $test {
			type RuntimeEvent = RuntimeEvent;
			type Balance = Balance;
			type AssetId = AssetId;
			type Currency = Balances;
			type ForceOrigin = EnsureRoot<AccountId>;
			type AssetDeposit = AssetDeposit;
			type MetadataDepositBase = MetadataDepositBase;
			type MetadataDepositPerByte = MetadataDepositPerByte;
			type ApprovalDeposit = ApprovalDeposit;
			type StringLimit = AssetsStringLimit;
			type Freezer = ();
			type Extra = ();
			type WeightInfo = ();
			type AssetAccountDeposit = AssetAccountDeposit;
			type RemoveItemsLimit = RemoveItemsLimit;
		}
	};
}

/// A fixed unix-time source for mocks: tests advance it explicitly via `MockTimestamp::set`.
#[macro_export]
macro_rules! impl_mock_unix_time {
	() => {
		pub struct MockUnixTime;
		impl frame_support::traits::UnixTime for MockUnixTime {
			fn now() -> core::time::Duration {
				core::time::Duration::from_secs(MOCK_NOW.with(|n| *n.borrow()))
			}
		}

		thread_local! {
			pub static MOCK_NOW: core::cell::RefCell<u64> = core::cell::RefCell::new(1_000);
		}

		pub fn set_now(secs: u64) {
			MOCK_NOW.with(|n| *n.borrow_mut() = secs);
		}
	};
}
