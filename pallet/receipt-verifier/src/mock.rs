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

use crate as pallet_receipt_verifier;
use revshare_pallet_common::{test_prelude::*, AssetsCurrency};

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
		AssetDirectory: pallet_asset_directory,
		ProvenanceGraph: pallet_provenance_graph,
		SplitterFactory: pallet_splitter_factory,
		FeeTreasury: pallet_fee_treasury,
		Escrow: pallet_escrow,
		ReceiptVerifier: pallet_receipt_verifier,
	}
);

impl_frame_system_config!(Test);
impl_pallet_balance_config!(Test);
impl_pallet_assets_config!(Test);
impl_pallet_timestamp_config!(Test);

impl pallet_roles::Config for Test {
	type RuntimeEvent = RuntimeEvent;
}

impl pallet_asset_directory::Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type RegistrarOrigin = EnsureRoot<AccountId>;
}

parameter_types! {
	pub const MaxEdgesPerAsset: u32 = 16;
	pub const MaxPayees: u32 = 16;
	pub const SplitterPalletId: PalletId = PalletId(*b"py/splt!");
	pub const EscrowPalletId: PalletId = PalletId(*b"py/escrw");
	pub const VerifierPalletId: PalletId = PalletId(*b"py/rcpt!");
	pub const PaymentAssetIdValue: AssetId = PAYMENT_ASSET_ID;
	pub const DisputeWindowSeconds: u64 = 259_200;
	pub const ChainId: u64 = 7668;
	pub VerifyingContractAddr: H160 = H160::from_low_u64_be(42);
	pub Eip712Name: Vec<u8> = b"AIUsageReceipts".to_vec();
	pub Eip712Version: Vec<u8> = b"1".to_vec();
}

impl pallet_provenance_graph::Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type Roles = Roles;
	type AssetDirectory = AssetDirectory;
	type MaxEdgesPerAsset = MaxEdgesPerAsset;
}

impl pallet_splitter_factory::Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type ProvenanceGraph = ProvenanceGraph;
	type Currency = AssetsCurrency<Test>;
	type PaymentAssetId = PaymentAssetIdValue;
	type PalletId = SplitterPalletId;
	type MaxPayees = MaxPayees;
}

impl pallet_fee_treasury::Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type Roles = Roles;
}

impl pallet_escrow::Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type Roles = Roles;
	type FeeTreasury = FeeTreasury;
	type SplitterPot = SplitterFactory;
	type Currency = AssetsCurrency<Test>;
	type UnixTime = Timestamp;
	type PaymentAssetId = PaymentAssetIdValue;
	type PalletId = EscrowPalletId;
	type DisputeWindowSeconds = DisputeWindowSeconds;
}

impl pallet_receipt_verifier::Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type Roles = Roles;
	type Splitter = SplitterFactory;
	type Escrow = Escrow;
	type Currency = AssetsCurrency<Test>;
	type UnixTime = Timestamp;
	type PaymentAssetId = PaymentAssetIdValue;
	type PalletId = VerifierPalletId;
	type Eip712Name = Eip712Name;
	type Eip712Version = Eip712Version;
	type ChainId = ChainId;
	type VerifyingContract = VerifyingContractAddr;
}

#[derive(Default)]
pub struct TestExt {
	initial_grants: Vec<(RoleId, AccountId)>,
	assets: Vec<(AssetId, AccountId)>,
	payment_asset_balances: Vec<(AccountId, Balance)>,
}

impl TestExt {
	pub fn with_verifier(mut self, who: AccountId) -> Self {
		self.initial_grants.push((roles::verifier(), who));
		self
	}

	pub fn with_pauser(mut self, who: AccountId) -> Self {
		self.initial_grants.push((roles::pauser(), who));
		self
	}

	pub fn with_contributor(mut self, who: AccountId) -> Self {
		self.initial_grants.push((roles::contributor(), who));
		self
	}

	pub fn with_asset(mut self, asset_id: AssetId, owner: AccountId) -> Self {
		self.assets.push((asset_id, owner));
		self
	}

	pub fn with_payment_asset_balances(mut self, balances: &[(AccountId, Balance)]) -> Self {
		self.payment_asset_balances = balances.to_vec();
		self
	}

	pub fn build(self) -> sp_io::TestExternalities {
		let mut storage = frame_system::GenesisConfig::default().build_storage::<Test>().unwrap();
		pallet_roles::GenesisConfig::<Test> { initial_grants: self.initial_grants }
			.assimilate_storage(&mut storage)
			.unwrap();
		pallet_fee_treasury::GenesisConfig::<Test> { fee_bps: 250, treasury_sink: None }
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
			Timestamp::set_timestamp(1_000_000);
			for (asset_id, owner) in self.assets {
				AssetDirectory::register_asset(RuntimeOrigin::root(), asset_id, owner).unwrap();
			}
		});
		ext
	}
}
