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

use crate as pallet_fee_treasury;
use revshare_pallet_common::test_prelude::*;

construct_runtime!(
	pub enum Test where
		Block = frame_system::mocking::MockBlock<Test>,
		NodeBlock = frame_system::mocking::MockBlock<Test>,
		UncheckedExtrinsic = frame_system::mocking::MockUncheckedExtrinsic<Test>,
	{
		System: frame_system,
		Roles: pallet_roles,
		FeeTreasury: pallet_fee_treasury,
	}
);

impl_frame_system_config!(Test);

impl pallet_roles::Config for Test {
	type RuntimeEvent = RuntimeEvent;
}

impl pallet_fee_treasury::Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type Roles = Roles;
}

#[derive(Default)]
pub struct TestExt {
	initial_grants: Vec<(RoleId, AccountId)>,
	fee_bps: u16,
	treasury_sink: Option<AccountId>,
}

impl TestExt {
	pub fn with_admin(mut self, who: AccountId) -> Self {
		self.initial_grants.push((roles::default_admin(), who));
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

		let mut ext: sp_io::TestExternalities = storage.into();
		ext.execute_with(|| System::set_block_number(1));
		ext
	}
}
