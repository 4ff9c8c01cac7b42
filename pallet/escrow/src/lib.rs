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

//! # Pallet Escrow
//!
//! Holds a pulled usage payment for `dispute_window_seconds` before it is eligible for
//! release, giving the paying user a window to raise a dispute. On release (automatic via
//! any caller, or via arbiter resolution), performs fee-split distribution: the protocol
//! fee to the treasury sink, the remainder to the asset's splitter pot.
#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

#[cfg(test)]
mod mock;
pub mod types;

use frame_support::{pallet_prelude::*, traits::UnixTime, PalletId};
use frame_system::pallet_prelude::*;
use revshare_pallet_common::{EscrowApi, FeeTreasuryInspect, PaymentCurrency, RolesProvider, SplitterPot};
use revshare_primitives::{roles, AssetId, Balance, PaymentId, Timestamp, BPS_DENOMINATOR};
use sp_runtime::traits::AccountIdConversion;
use types::{EscrowedPayment, PaymentStatus};

const LOG_TARGET: &str = "escrow";

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
		type FeeTreasury: FeeTreasuryInspect<Self::AccountId>;
		type SplitterPot: SplitterPot<Self::AccountId>;
		type Currency: PaymentCurrency<Self::AccountId>;
		type UnixTime: UnixTime;
		/// The single asset id all escrowed payments are denominated in.
		type PaymentAssetId: Get<AssetId>;
		/// Sovereign account custodying every outstanding payment.
		type PalletId: Get<PalletId>;
		/// Seconds a payment sits `Held` before anyone may `release` it.
		type DisputeWindowSeconds: Get<Timestamp>;
	}

	#[pallet::storage]
	#[pallet::getter(fn next_payment_id)]
	pub type NextPaymentId<T: Config> = StorageValue<_, PaymentId, ValueQuery>;

	#[pallet::storage]
	#[pallet::getter(fn payment)]
	pub type Payments<T: Config> =
		StorageMap<_, Twox64Concat, PaymentId, EscrowedPayment<T::AccountId>, OptionQuery>;

	#[pallet::storage]
	#[pallet::getter(fn is_paused)]
	pub type Paused<T: Config> = StorageValue<_, bool, ValueQuery>;

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		PaymentHeld { payment_id: PaymentId, asset_id: AssetId, user: T::AccountId, amount: Balance },
		DisputeOpened { payment_id: PaymentId },
		PaymentReleased { payment_id: PaymentId, destination: T::AccountId },
		PaymentRefunded { payment_id: PaymentId, user: T::AccountId },
		Paused { by: T::AccountId },
		Unpaused { by: T::AccountId },
	}

	#[pallet::error]
	pub enum Error<T> {
		PaymentDoesNotExist,
		NotPaymentUser,
		InvalidStatus,
		StillLocked,
		MissingArbiterRole,
		MissingPauserRole,
		Paused,
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Opens a dispute over `payment_id` before its release time elapses. Only the
		/// payment's own user may do this.
		#[pallet::call_index(0)]
		#[pallet::weight(10_000)]
		pub fn open_dispute(origin: OriginFor<T>, payment_id: PaymentId) -> DispatchResult {
			let caller = ensure_signed(origin)?;
			ensure!(!Paused::<T>::get(), Error::<T>::Paused);

			Payments::<T>::try_mutate(payment_id, |maybe_payment| -> DispatchResult {
				let payment = maybe_payment.as_mut().ok_or(Error::<T>::PaymentDoesNotExist)?;
				ensure!(payment.user == caller, Error::<T>::NotPaymentUser);
				ensure!(payment.status == PaymentStatus::Held, Error::<T>::InvalidStatus);
				ensure!(
					T::UnixTime::now().as_secs() <= payment.release_time,
					Error::<T>::StillLocked
				);
				payment.status = PaymentStatus::Disputed;
				Ok(())
			})?;

			Self::deposit_event(Event::DisputeOpened { payment_id });
			Ok(())
		}

		/// Releases a `Held` payment past its release time, distributing it fee-split
		/// between the treasury and the asset's splitter. Callable by anyone.
		#[pallet::call_index(1)]
		#[pallet::weight(10_000)]
		pub fn release(origin: OriginFor<T>, payment_id: PaymentId) -> DispatchResult {
			ensure_signed(origin)?;
			ensure!(!Paused::<T>::get(), Error::<T>::Paused);

			let payment = Payments::<T>::get(payment_id).ok_or(Error::<T>::PaymentDoesNotExist)?;
			ensure!(payment.status == PaymentStatus::Held, Error::<T>::InvalidStatus);
			ensure!(
				T::UnixTime::now().as_secs() >= payment.release_time,
				Error::<T>::StillLocked
			);

			Self::do_release(payment_id, payment)
		}

		/// Resolves a disputed payment. Gated by the `ARBITER` role: either refunds the
		/// full amount back to the user, or performs the same fee-split release as above.
		#[pallet::call_index(2)]
		#[pallet::weight(10_000)]
		pub fn resolve_dispute(
			origin: OriginFor<T>,
			payment_id: PaymentId,
			refund_to_user: bool,
		) -> DispatchResult {
			let caller = ensure_signed(origin)?;
			ensure!(!Paused::<T>::get(), Error::<T>::Paused);
			ensure!(T::Roles::has_role(roles::arbiter(), &caller), Error::<T>::MissingArbiterRole);

			let payment = Payments::<T>::get(payment_id).ok_or(Error::<T>::PaymentDoesNotExist)?;
			ensure!(payment.status == PaymentStatus::Disputed, Error::<T>::InvalidStatus);

			if refund_to_user {
				let pot = Self::pot_account();
				T::Currency::transfer(T::PaymentAssetId::get(), &pot, &payment.user, payment.amount)?;

				Payments::<T>::mutate(payment_id, |p| {
					if let Some(p) = p {
						p.status = PaymentStatus::Refunded;
					}
				});
				Self::deposit_event(Event::PaymentRefunded { payment_id, user: payment.user });
				Ok(())
			} else {
				Self::do_release(payment_id, payment)
			}
		}

		#[pallet::call_index(3)]
		#[pallet::weight(10_000)]
		pub fn pause(origin: OriginFor<T>) -> DispatchResult {
			let caller = ensure_signed(origin)?;
			ensure!(T::Roles::has_role(roles::pauser(), &caller), Error::<T>::MissingPauserRole);
			Paused::<T>::put(true);
			Self::deposit_event(Event::Paused { by: caller });
			Ok(())
		}

		#[pallet::call_index(4)]
		#[pallet::weight(10_000)]
		pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
			let caller = ensure_signed(origin)?;
			ensure!(T::Roles::has_role(roles::pauser(), &caller), Error::<T>::MissingPauserRole);
			Paused::<T>::put(false);
			Self::deposit_event(Event::Unpaused { by: caller });
			Ok(())
		}
	}
}

impl<T: Config> Pallet<T> {
	pub fn pot_account() -> T::AccountId {
		T::PalletId::get().into_account_truncating()
	}

	/// Performs fee-split distribution and transitions `payment_id` to `Released`. Both
	/// transfers happen inside the caller's dispatchable, so a failure here reverts the
	/// whole extrinsic and the payment's status is left untouched.
	fn do_release(
		payment_id: PaymentId,
		payment: EscrowedPayment<T::AccountId>,
	) -> DispatchResult {
		let pot = Self::pot_account();
		let sink = T::FeeTreasury::treasury_sink();
		let fee = match &sink {
			Some(_) => payment
				.amount
				.saturating_mul(T::FeeTreasury::fee_bps() as Balance)
				/ BPS_DENOMINATOR as Balance,
			None => 0,
		};
		let remainder = payment.amount.saturating_sub(fee);

		if fee > 0 {
			if let Some(sink) = sink {
				T::Currency::transfer(T::PaymentAssetId::get(), &pot, &sink, fee)?;
			}
		}

		let splitter_pot = T::SplitterPot::pot_account_of(payment.splitter_ref);
		T::Currency::transfer(T::PaymentAssetId::get(), &pot, &splitter_pot, remainder)?;

		Payments::<T>::mutate(payment_id, |p| {
			if let Some(p) = p {
				p.status = PaymentStatus::Released;
			}
		});

		Self::deposit_event(Event::PaymentReleased { payment_id, destination: splitter_pot });
		Ok(())
	}
}

impl<T: Config> EscrowApi<T::AccountId> for Pallet<T> {
	fn pot_account() -> T::AccountId {
		Pallet::<T>::pot_account()
	}

	fn hold_payment(
		asset_id: AssetId,
		user: T::AccountId,
		amount: Balance,
		splitter_ref: AssetId,
	) -> Result<PaymentId, DispatchError> {
		ensure!(!Paused::<T>::get(), Error::<T>::Paused);

		let payment_id = NextPaymentId::<T>::get();
		let release_time = T::UnixTime::now().as_secs().saturating_add(T::DisputeWindowSeconds::get());

		Payments::<T>::insert(
			payment_id,
			EscrowedPayment {
				asset_id,
				user: user.clone(),
				amount,
				splitter_ref,
				release_time,
				status: PaymentStatus::Held,
			},
		);
		NextPaymentId::<T>::put(payment_id.saturating_add(1));

		Pallet::<T>::deposit_event(Event::PaymentHeld { payment_id, asset_id, user, amount });
		Ok(payment_id)
	}
}
