use anchor_lang::solana_program::pubkey::Pubkey;

use crate::state::Boost;

/// A boost mid-lifecycle, with the deposit untouched.
pub fn boost_with(balance: u64, start_time: i64, end_time: i64) -> Boost {
    Boost {
        bump: 255,
        id: 1,
        owner: Pubkey::new_unique(),
        guard: [0x11u8; 20],
        token_mint: Pubkey::new_unique(),
        token_vault: Pubkey::new_unique(),
        initial_amount: balance,
        balance,
        start_time,
        end_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CHAIN_ID;
    use crate::error::BoostError;
    use crate::instructions::{batch_total, check_batch_entries};
    use crate::test::{code_of, error_code};
    use crate::test::test_signature::{guard_address, guard_secret, sign_digest};
    use crate::utils::{claim_digest, recover_signer};

    const T: i64 = 1_700_000_000;

    #[test]
    fn window_accepts_only_start_inclusive_end_exclusive() {
        let boost = boost_with(100, T, T + 60);

        let err = boost.check_active(T - 1).unwrap_err();
        assert_eq!(error_code(err), code_of(BoostError::BoostNotStarted));

        assert!(boost.check_active(T).is_ok());
        assert!(boost.check_active(T + 30).is_ok());
        assert!(boost.check_active(T + 59).is_ok());

        let err = boost.check_active(T + 60).unwrap_err();
        assert_eq!(error_code(err), code_of(BoostError::BoostEnded));

        let err = boost.check_active(T + 61).unwrap_err();
        assert_eq!(error_code(err), code_of(BoostError::BoostEnded));
    }

    #[test]
    fn window_sentinels_mean_always_started_and_never_expiring() {
        let expiry_only = boost_with(100, 0, T + 60);
        assert!(expiry_only.check_active(0).is_ok());
        assert!(expiry_only.check_active(T).is_ok());

        let open_ended = boost_with(100, T, i64::MAX);
        assert!(open_ended.check_active(T).is_ok());
        assert!(open_ended.check_active(i64::MAX - 1).is_ok());
    }

    #[test]
    fn empty_window_never_accepts() {
        let boost = boost_with(100, T, T);
        assert_eq!(
            error_code(boost.check_active(T - 1).unwrap_err()),
            code_of(BoostError::BoostNotStarted)
        );
        assert_eq!(
            error_code(boost.check_active(T).unwrap_err()),
            code_of(BoostError::BoostEnded)
        );
    }

    #[test]
    fn debit_reduces_balance_exactly() {
        let mut boost = boost_with(100, 0, i64::MAX);

        boost.debit(33).unwrap();
        assert_eq!(boost.balance, 67);

        boost.debit(67).unwrap();
        assert_eq!(boost.balance, 0);
        assert_eq!(boost.initial_amount, 100);
    }

    #[test]
    fn debit_beyond_balance_fails_without_mutating() {
        let mut boost = boost_with(100, 0, i64::MAX);

        let err = boost.debit(101).unwrap_err();
        assert_eq!(error_code(err), code_of(BoostError::InsufficientBalance));
        assert_eq!(boost.balance, 100);
    }

    #[test]
    fn lifetime_debits_never_exceed_the_deposit() {
        let mut boost = boost_with(100, 0, i64::MAX);
        let mut claimed = 0u64;

        for _ in 0..3 {
            boost.debit(33).unwrap();
            claimed += 33;
            assert_eq!(boost.balance, boost.initial_amount - claimed);
        }
        assert_eq!(boost.balance, 1);

        // A fourth claim of 33 would overdraw the pool
        assert_eq!(
            error_code(boost.debit(33).unwrap_err()),
            code_of(BoostError::InsufficientBalance)
        );
        assert!(claimed <= boost.initial_amount);
    }

    #[test]
    fn batch_total_sums_and_guards_overflow() {
        assert_eq!(batch_total(&[33, 33, 33, 33]).unwrap(), 132);
        assert_eq!(batch_total(&[]).unwrap(), 0);

        let err = batch_total(&[u64::MAX, 1]).unwrap_err();
        assert_eq!(error_code(err), code_of(BoostError::ArithmeticOverflow));
    }

    #[test]
    fn batch_rejects_mismatched_shapes() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        // Each slice short by one, in turn
        let err = check_batch_entries(&[a, b], &[33], &[[0u8; 65]; 2], &[false, false]);
        assert_eq!(error_code(err.unwrap_err()), code_of(BoostError::LengthMismatch));

        let err = check_batch_entries(&[a, b], &[33, 33], &[[0u8; 65]; 1], &[false, false]);
        assert_eq!(error_code(err.unwrap_err()), code_of(BoostError::LengthMismatch));

        let err = check_batch_entries(&[a, b], &[33, 33], &[[0u8; 65]; 2], &[false]);
        assert_eq!(error_code(err.unwrap_err()), code_of(BoostError::LengthMismatch));

        // Matching lengths pass, including the empty batch
        assert!(check_batch_entries(&[a, b], &[33, 33], &[[0u8; 65]; 2], &[false, false]).is_ok());
        assert!(check_batch_entries(&[], &[], &[], &[]).is_ok());
    }

    #[test]
    fn batch_rejects_duplicate_recipients() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        let err = check_batch_entries(
            &[a, b, a],
            &[33, 33, 33],
            &[[0u8; 65]; 3],
            &[false, false, false],
        );
        assert_eq!(
            error_code(err.unwrap_err()),
            code_of(BoostError::RecipientAlreadyClaimed)
        );
    }

    #[test]
    fn batch_with_already_claimed_entry_redeems_nothing() {
        let mut boost = boost_with(100, 0, i64::MAX);
        let recipients = [Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique()];
        let amounts = [33, 33, 33];
        let mut claimed = [false, false, true];

        // The last entry was already redeemed, so the batch fails during
        // validation and neither the balance nor the other two entries
        // are touched
        boost.check_active(0).unwrap();
        let err = check_batch_entries(&recipients, &amounts, &[[0u8; 65]; 3], &claimed);
        assert_eq!(
            error_code(err.unwrap_err()),
            code_of(BoostError::RecipientAlreadyClaimed)
        );

        assert_eq!(boost.balance, 100);
        assert_eq!(claimed[..2], [false, false]);

        // Dropping the redeemed entry lets the rest settle
        claimed[2] = false;
        check_batch_entries(&recipients, &amounts, &[[0u8; 65]; 3], &claimed).unwrap();
        boost.debit(batch_total(&amounts).unwrap()).unwrap();
        assert_eq!(boost.balance, 1);
    }

    #[test]
    fn withdraw_only_after_end_and_only_while_funded() {
        let mut boost = boost_with(100, T, T + 60);

        let err = boost.withdrawable(T + 59).unwrap_err();
        assert_eq!(error_code(err), code_of(BoostError::BoostNotEnded));

        let remaining = boost.withdrawable(T + 60).unwrap();
        assert_eq!(remaining, 100);
        boost.debit(remaining).unwrap();

        // A drained boost has nothing left to sweep
        let err = boost.withdrawable(T + 60).unwrap_err();
        assert_eq!(error_code(err), code_of(BoostError::NothingToWithdraw));
    }

    /// The claim path's validation steps, in handler order, against pure
    /// state. Mirrors handle_claim minus the account plumbing.
    fn try_claim(
        boost: &mut Boost,
        claimed: &mut bool,
        recipient: &Pubkey,
        amount: u64,
        signature: &[u8; 65],
        now: i64,
    ) -> std::result::Result<(), u32> {
        boost.check_active(now).map_err(error_code)?;
        if *claimed {
            return Err(code_of(BoostError::RecipientAlreadyClaimed));
        }
        let digest = claim_digest(CHAIN_ID, &crate::ID, boost.id, recipient, amount);
        if recover_signer(&digest, signature) != Some(boost.guard) {
            return Err(code_of(BoostError::InvalidSignature));
        }
        boost.debit(amount).map_err(error_code)?;
        *claimed = true;
        Ok(())
    }

    #[test]
    fn claim_scenario_deposit_100_amount_33() {
        let secret = guard_secret();
        let mut boost = boost_with(100, T, i64::MAX);
        boost.guard = guard_address(&secret);

        let recipient_a = Pubkey::new_unique();
        let recipient_b = Pubkey::new_unique();
        let digest_a = claim_digest(CHAIN_ID, &crate::ID, boost.id, &recipient_a, 33);
        let signature_a = sign_digest(&digest_a, &secret);

        // A claims 33, balance drops to 67
        let mut a_claimed = false;
        try_claim(&mut boost, &mut a_claimed, &recipient_a, 33, &signature_a, T).unwrap();
        assert_eq!(boost.balance, 67);

        // Replaying A's signature is rejected, not treated as success
        let err =
            try_claim(&mut boost, &mut a_claimed, &recipient_a, 33, &signature_a, T).unwrap_err();
        assert_eq!(err, code_of(BoostError::RecipientAlreadyClaimed));
        assert_eq!(boost.balance, 67);

        // B cannot redeem a signature issued for A
        let mut b_claimed = false;
        let err =
            try_claim(&mut boost, &mut b_claimed, &recipient_b, 33, &signature_a, T).unwrap_err();
        assert_eq!(err, code_of(BoostError::InvalidSignature));
        assert!(!b_claimed);
        assert_eq!(boost.balance, 67);
    }

    #[test]
    fn batch_of_four_33s_fails_whole_against_deposit_100() {
        let mut boost = boost_with(100, 0, i64::MAX);

        // Sufficiency is a single check against the sum, so the batch
        // fails as a whole and the balance is untouched
        let total = batch_total(&[33, 33, 33, 33]).unwrap();
        assert_eq!(total, 132);
        let err = boost.debit(total).unwrap_err();
        assert_eq!(error_code(err), code_of(BoostError::InsufficientBalance));
        assert_eq!(boost.balance, 100);
    }

    #[test]
    fn claim_scenario_sixty_second_window() {
        let secret = guard_secret();
        let mut boost = boost_with(100, T, T + 60);
        boost.guard = guard_address(&secret);

        let recipient = Pubkey::new_unique();
        let digest = claim_digest(CHAIN_ID, &crate::ID, boost.id, &recipient, 33);
        let signature = sign_digest(&digest, &secret);

        let mut claimed = false;
        let err =
            try_claim(&mut boost, &mut claimed, &recipient, 33, &signature, T - 1).unwrap_err();
        assert_eq!(err, code_of(BoostError::BoostNotStarted));

        let err =
            try_claim(&mut boost, &mut claimed, &recipient, 33, &signature, T + 60).unwrap_err();
        assert_eq!(err, code_of(BoostError::BoostEnded));
        assert!(!claimed);
        assert_eq!(boost.balance, 100);

        try_claim(&mut boost, &mut claimed, &recipient, 33, &signature, T + 30).unwrap();
        assert!(claimed);
        assert_eq!(boost.balance, 67);
    }
}
