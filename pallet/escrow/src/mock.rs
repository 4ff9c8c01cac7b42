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

use crate as pallet_escrow;
use revshare_pallet_common::{test_prelude::*, AssetsCurrency, SplitterPot};
use sp_runtime::traits::AccountIdConversion;

construct_runtime!(
	pub enum Test where
		Block = frame_system::mocking::MockBlock<Test>,
		NodeBlock = frame_system::mocking::MockBlock<Test>,
		UncheckedExtrinsic = frame_system::mocking::MockUncheckedExtrinsic<Test>,
	{
		System: frame_system,
		Balances: pallet_balances,
		Assets: pallet_assets,
		Timestamp: pallet_timestamp,
		Roles: pallet_roles,
		FeeTreasury: pallet_fee_treasury,
		Escrow: pallet_escrow,
	}
);

impl_frame_system_config!(Test);
impl_pallet_balance_config!(Test);
impl_pallet_assets_config!(Test);
impl_pallet_timestamp_config!(Test);

impl pallet_roles::Config for Test {
	type RuntimeEvent = RuntimeEvent;
}

impl pallet_fee_treasury::Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type Roles = Roles;
}

pub struct MockSplitterPot;
impl SplitterPot<AccountId> for MockSplitterPot {
	fn pot_account_of(asset_id: AssetId) -> AccountId {
		PalletId(*b"py/splt!").into_sub_account_truncating(asset_id)
	}
}

parameter_types! {
	pub const EscrowPalletId: PalletId = PalletId(*b"py/escrw");
	pub const PaymentAssetIdValue: AssetId = PAYMENT_ASSET_ID;
	pub const DisputeWindowSeconds: u64 = 259_200;
}

impl pallet_escrow::Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type Roles = Roles;
	type FeeTreasury = FeeTreasury;
	type SplitterPot = MockSplitterPot;
	type Currency = AssetsCurrency<Test>;
	type UnixTime = Timestamp;
	type PaymentAssetId = PaymentAssetIdValue;
	type PalletId = EscrowPalletId;
	type DisputeWindowSeconds = DisputeWindowSeconds;
}

#[derive(Default)]
pub struct TestExt {
	initial_grants: Vec<(RoleId, AccountId)>,
	fee_bps: u16,
	treasury_sink: Option<AccountId>,
	payment_asset_balances: Vec<(AccountId, Balance)>,
	now: u64,
}

impl TestExt {
	pub fn with_admin(mut self, who: AccountId) -> Self {
		self.initial_grants.push((roles::default_admin(), who));
		self
	}

	pub fn with_arbiter(mut self, who: AccountId) -> Self {
		self.initial_grants.push((roles::arbiter(), who));
		self
	}

	pub fn with_pauser(mut self, who: AccountId) -> Self {
		self.initial_grants.push((roles::pauser(), who));
		self
	}

	pub fn with_fee_bps(mut self, fee_bps: u16) -> Self {
		self.fee_bps = fee_bps;
		self
	}

	pub fn with_treasury_sink(mut self, sink: AccountId) -> Self {
		self.treasury_sink = Some(sink);
		self
	}

	pub fn with_payment_asset_balances(mut self, balances: &[(AccountId, Balance)]) -> Self {
		self.payment_asset_balances = balances.to_vec();
		self
	}

	pub fn at_time(mut self, now: u64) -> Self {
		self.now = now;
		self
	}

	pub fn build(self) -> sp_io::TestExternalities {
		let mut storage = frame_system::GenesisConfig::default().build_storage::<Test>().unwrap();
		pallet_roles::GenesisConfig::<Test> { initial_grants: self.initial_grants }
			.assimilate_storage(&mut storage)
			.unwrap();
		pallet_fee_treasury::GenesisConfig::<Test> {
			fee_bps: self.fee_bps,
			treasury_sink: self.treasury_sink,
		}
		.assimilate_storage(&mut storage)
		.unwrap();

		let owner = create_account(100);
		let mut accounts = vec![];
		for (who, balance) in &self.payment_asset_balances {
			accounts.push((PAYMENT_ASSET_ID, who.clone(), *balance));
		}
		pallet_assets::GenesisConfig::<Test> {
			assets: vec![(PAYMENT_ASSET_ID, owner, true, 1)],
			metadata: vec![(PAYMENT_ASSET_ID, b"USDX".to_vec(), b"USDX".to_vec(), 6)],
			accounts,
		}
		.assimilate_storage(&mut storage)
		.unwrap();

		let mut ext: sp_io::TestExternalities = storage.into();
		ext.execute_with(|| {
			System::set_block_number(1);
			Timestamp::set_timestamp(self.now.saturating_mul(1000));
		});
		ext
	}
}
