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

//! # Pallet Fee Treasury
//!
//! Holds the two knobs that govern Escrow's fee-split distribution: the protocol fee rate,
//! in basis points, and the account that collects it. Both are admin-gated and read by
//! Escrow through [`FeeTreasuryInspect`].
#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

#[cfg(test)]
mod mock;

use frame_support::pallet_prelude::*;
use frame_system::pallet_prelude::*;
use revshare_pallet_common::{FeeTreasuryInspect, RolesProvider};
use revshare_primitives::{roles, MAX_FEE_BPS};

const LOG_TARGET: &str = "fee-treasury";

#[frame_support::pallet]
pub mod pallet {
	use super::*;

	#[pallet::pallet]
	#[pallet::generate_store(pub(super) trait Store)]
	pub struct Pallet<T>(_);

	#[pallet::config]
	pub trait Config: frame_system::Config {
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
		type Roles: RolesProvider<Self::AccountId>;
	}

	#[pallet::storage]
	#[pallet::getter(fn fee_bps)]
	pub type FeeBps<T: Config> = StorageValue<_, u16, ValueQuery>;

	#[pallet::storage]
	#[pallet::getter(fn treasury_sink)]
	pub type TreasurySink<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

	#[pallet::genesis_config]
	pub struct GenesisConfig<T: Config> {
		pub fee_bps: u16,
		pub treasury_sink: Option<T::AccountId>,
	}

	#[cfg(feature = "std")]
	impl<T: Config> Default for GenesisConfig<T> {
		fn default() -> Self {
			Self { fee_bps: 0, treasury_sink: None }
		}
	}

	#[pallet::genesis_build]
	impl<T: Config> GenesisBuild<T> for GenesisConfig<T> {
		fn build(&self) {
			assert!(self.fee_bps <= MAX_FEE_BPS, "fee_bps exceeds MAX_FEE_BPS at genesis");
			FeeBps::<T>::put(self.fee_bps);
			if let Some(sink) = &self.treasury_sink {
				TreasurySink::<T>::put(sink.clone());
			}
		}
	}

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		FeeUpdated { new_fee_bps: u16 },
		TreasuryUpdated { new_sink: T::AccountId },
	}

	#[pallet::error]
	pub enum Error<T> {
		MissingAdminRole,
		FeeTooHigh,
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		#[pallet::call_index(0)]
		#[pallet::weight(10_000)]
		pub fn set_fee_bps(origin: OriginFor<T>, new_bps: u16) -> DispatchResult {
			let caller = ensure_signed(origin)?;
			ensure!(
				T::Roles::has_role(roles::default_admin(), &caller),
				Error::<T>::MissingAdminRole
			);
			ensure!(new_bps <= MAX_FEE_BPS, Error::<T>::FeeTooHigh);

			FeeBps::<T>::put(new_bps);
			Self::deposit_event(Event::FeeUpdated { new_fee_bps: new_bps });
			Ok(())
		}

		#[pallet::call_index(1)]
		#[pallet::weight(10_000)]
		pub fn set_treasury_sink(origin: OriginFor<T>, new_sink: T::AccountId) -> DispatchResult {
			let caller = ensure_signed(origin)?;
			ensure!(
				T::Roles::has_role(roles::default_admin(), &caller),
				Error::<T>::MissingAdminRole
			);

			TreasurySink::<T>::put(new_sink.clone());
			Self::deposit_event(Event::TreasuryUpdated { new_sink });
			Ok(())
		}
	}
}

impl<T: Config> FeeTreasuryInspect<T::AccountId> for Pallet<T> {
	fn fee_bps() -> u16 {
		Pallet::<T>::fee_bps()
	}

	fn treasury_sink() -> Option<T::AccountId> {
		Pallet::<T>::treasury_sink()
	}
}
