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

use codec::{Decode, Encode};
use revshare_primitives::{AssetId, Balance, Nonce, Timestamp};
use scale_info::TypeInfo;

/// A typed-data message authorizing a single pull-payment for `asset_id`'s usage. Signed
/// off-chain by `user` per the EIP-712 domain fixed on the verifier at genesis.
#[derive(Clone, Encode, Decode, TypeInfo, Debug, PartialEq, Eq)]
pub struct UsageReceipt<AccountId> {
	pub asset_id: AssetId,
	pub amount: Balance,
	pub user: AccountId,
	pub nonce: Nonce,
	pub deadline: Timestamp,
}

/// A raw 65-byte `(r, s, v)` ECDSA signature over the receipt's EIP-712 digest.
pub type ReceiptSignature = [u8; 65];
