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

//! # Pallet Roles
//!
//! A minimal on-chain access-control registry, in the spirit of OpenZeppelin's
//! `AccessControl`: roles are opaque 32-byte identifiers (see `revshare_primitives::roles`)
//! and membership is a simple `(role, account) -> ()` set. The `DEFAULT_ADMIN` role can
//! grant and revoke any role, including itself; every other pallet in this workspace reads
//! membership through [`revshare_pallet_common::RolesProvider`] rather than depending on this
//! crate directly.
#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

#[cfg(test)]
mod mock;

use frame_support::pallet_prelude::*;
use frame_system::pallet_prelude::*;
use revshare_pallet_common::RolesProvider;
use revshare_primitives::{roles, RoleId};

const LOG_TARGET: &str = "roles";

#[frame_support::pallet]
pub mod pallet {
	use super::*;

	#[pallet::pallet]
	#[pallet::generate_store(pub(super) trait Store)]
	pub struct Pallet<T>(_);

	#[pallet::config]
	pub trait Config: frame_system::Config {
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
	}

	/// `(role, account) -> ()` membership set.
	#[pallet::storage]
	#[pallet::getter(fn role_members)]
	pub type RoleMembers<T: Config> =
		StorageDoubleMap<_, Twox64Concat, RoleId, Twox64Concat, T::AccountId, (), OptionQuery>;

	#[pallet::genesis_config]
	pub struct GenesisConfig<T: Config> {
		/// Initial `(role, account)` grants, used to bootstrap the first `DEFAULT_ADMIN`.
		pub initial_grants: Vec<(RoleId, T::AccountId)>,
	}

	#[cfg(feature = "std")]
	impl<T: Config> Default for GenesisConfig<T> {
		fn default() -> Self {
			Self { initial_grants: Default::default() }
		}
	}

	#[pallet::genesis_build]
	impl<T: Config> GenesisBuild<T> for GenesisConfig<T> {
		fn build(&self) {
			for (role, who) in &self.initial_grants {
				RoleMembers::<T>::insert(role, who, ());
			}
		}
	}

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		RoleGranted { role: RoleId, account: T::AccountId },
		RoleRevoked { role: RoleId, account: T::AccountId },
	}

	#[pallet::error]
	pub enum Error<T> {
		/// The caller does not hold `DEFAULT_ADMIN` and cannot manage role membership.
		MissingAdminRole,
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Grants `role` to `account`. Requires the caller to hold `DEFAULT_ADMIN`.
		#[pallet::call_index(0)]
		#[pallet::weight(10_000)]
		pub fn grant_role(
			origin: OriginFor<T>,
			role: RoleId,
			account: T::AccountId,
		) -> DispatchResult {
			let caller = ensure_signed(origin)?;
			ensure!(Self::has_role(roles::default_admin(), &caller), Error::<T>::MissingAdminRole);

			RoleMembers::<T>::insert(role, &account, ());
			Self::deposit_event(Event::RoleGranted { role, account });
			Ok(())
		}

		/// Revokes `role` from `account`. Requires the caller to hold `DEFAULT_ADMIN`.
		#[pallet::call_index(1)]
		#[pallet::weight(10_000)]
		pub fn revoke_role(
			origin: OriginFor<T>,
			role: RoleId,
			account: T::AccountId,
		) -> DispatchResult {
			let caller = ensure_signed(origin)?;
			ensure!(Self::has_role(roles::default_admin(), &caller), Error::<T>::MissingAdminRole);

			RoleMembers::<T>::remove(role, &account);
			Self::deposit_event(Event::RoleRevoked { role, account });
			Ok(())
		}
	}
}

impl<T: Config> Pallet<T> {
	pub fn has_role(role: RoleId, who: &T::AccountId) -> bool {
		RoleMembers::<T>::contains_key(role, who)
	}
}

impl<T: Config> RolesProvider<T::AccountId> for Pallet<T> {
	fn has_role(role: RoleId, who: &T::AccountId) -> bool {
		Pallet::<T>::has_role(role, who)
	}
}
