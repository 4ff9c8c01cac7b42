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

//! Well-known role identifiers, derived the same way across every pallet so that a role
//! granted once through `pallet-roles` means the same thing everywhere it is checked.

use crate::RoleId;
use sp_io::hashing::keccak_256;

/// Derives a [`RoleId`] from its human-readable name, e.g. `role_id("VERIFIER")`.
pub fn role_id(name: &str) -> RoleId {
	keccak_256(name.as_bytes())
}

/// Can grant and revoke any role, including itself.
pub fn default_admin() -> RoleId {
	role_id("DEFAULT_ADMIN")
}

/// Can pause/unpause the ReceiptVerifier and Escrow.
pub fn pauser() -> RoleId {
	role_id("PAUSER")
}

/// Can resolve an open dispute in Escrow.
pub fn arbiter() -> RoleId {
	role_id("ARBITER")
}

/// Authorized to submit verified usage receipts on behalf of a relaying gateway.
pub fn verifier() -> RoleId {
	role_id("VERIFIER")
}

/// Can register new assets and contributor edges in the provenance graph.
pub fn contributor_admin() -> RoleId {
	role_id("CONTRIBUTOR_ADMIN")
}

/// Eligible to be recorded as a contributor edge's payee.
pub fn contributor() -> RoleId {
	role_id("CONTRIBUTOR")
}
