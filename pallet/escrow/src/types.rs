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

use codec::{Decode, Encode, MaxEncodedLen};
use revshare_primitives::{AssetId, Balance, Timestamp};
use scale_info::TypeInfo;

/// `Held -> {Disputed, Released}`, `Disputed -> {Released, Refunded}`. `Released` and
/// `Refunded` are terminal; no state is ever revisited.
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
	Held,
	Disputed,
	Released,
	Refunded,
}

#[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, Debug, PartialEq, Eq)]
pub struct EscrowedPayment<AccountId> {
	pub asset_id: AssetId,
	pub user: AccountId,
	pub amount: Balance,
	pub splitter_ref: AssetId,
	pub release_time: Timestamp,
	pub status: PaymentStatus,
}
