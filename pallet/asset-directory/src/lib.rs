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

//! # Pallet Asset Directory
//!
//! A minimal stand-in for the external `IAssetToken` collaborator the wider system assumes
//! (NFT/SFT ownership, metadata, transfer). This workspace is only responsible for revenue
//! sharing, so the directory here only tracks an asset id's current owner — enough for
//! ProvenanceGraph to check "is the caller the asset owner" without depending on a full NFT
//! pallet.
#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

#[cfg(test)]
mod mock;

use frame_support::pallet_prelude::*;
use frame_system::pallet_prelude::*;
use revshare_pallet_common::AssetDirectory;
use revshare_primitives::AssetId;

#[frame_support::pallet]
pub mod pallet {
	use super::*;

	#[pallet::pallet]
	#[pallet::generate_store(pub(super) trait Store)]
	pub struct Pallet<T>(_);

	#[pallet::config]
	pub trait Config: frame_system::Config {
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
		/// Origin authorized to register new assets (the deployment's admin multisig, in
		/// the real system: the bridge that mints the corresponding NFT).
		type RegistrarOrigin: EnsureOrigin<Self::RuntimeOrigin>;
	}

	#[pallet::storage]
	#[pallet::getter(fn owner_of)]
	pub type Owners<T: Config> = StorageMap<_, Twox64Concat, AssetId, T::AccountId, OptionQuery>;

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		AssetRegistered { asset_id: AssetId, owner: T::AccountId },
		AssetOwnershipTransferred { asset_id: AssetId, from: T::AccountId, to: T::AccountId },
	}

	#[pallet::error]
	pub enum Error<T> {
		AssetAlreadyExists,
		AssetDoesNotExist,
		NotAssetOwner,
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		#[pallet::call_index(0)]
		#[pallet::weight(10_000)]
		pub fn register_asset(
			origin: OriginFor<T>,
			asset_id: AssetId,
			owner: T::AccountId,
		) -> DispatchResult {
			T::RegistrarOrigin::ensure_origin(origin)?;
			ensure!(!Owners::<T>::contains_key(asset_id), Error::<T>::AssetAlreadyExists);

			Owners::<T>::insert(asset_id, &owner);
			Self::deposit_event(Event::AssetRegistered { asset_id, owner });
			Ok(())
		}

		#[pallet::call_index(1)]
		#[pallet::weight(10_000)]
		pub fn transfer_asset(
			origin: OriginFor<T>,
			asset_id: AssetId,
			new_owner: T::AccountId,
		) -> DispatchResult {
			let caller = ensure_signed(origin)?;
			let current_owner =
				Owners::<T>::get(asset_id).ok_or(Error::<T>::AssetDoesNotExist)?;
			ensure!(current_owner == caller, Error::<T>::NotAssetOwner);

			Owners::<T>::insert(asset_id, &new_owner);
			Self::deposit_event(Event::AssetOwnershipTransferred {
				asset_id,
				from: caller,
				to: new_owner,
			});
			Ok(())
		}
	}
}

impl<T: Config> AssetDirectory<T::AccountId> for Pallet<T> {
	fn owner_of(asset_id: AssetId) -> Option<T::AccountId> {
		Pallet::<T>::owner_of(asset_id)
	}
}
