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
use revshare_primitives::AssetId;
use scale_info::TypeInfo;

/// A direct revenue-share entitlement granted to a contributing account.
#[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, Debug, PartialEq, Eq)]
pub struct ContributorEdge<AccountId> {
	pub contributor: AccountId,
	pub weight_bps: u16,
}

/// A derivation edge: `weight_bps` of this asset's revenue flows to `parent_asset`'s own
/// splitter, letting a derivative work's payments cascade to the assets it was built from.
#[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, Debug, PartialEq, Eq)]
pub struct ParentEdge {
	pub parent_asset: AssetId,
	pub weight_bps: u16,
}
