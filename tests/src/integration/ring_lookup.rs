//! # Ring Lookup Properties
//!
//! The externally testable properties of the oracle:
//!
//! 1. **Round-trip**: Submit(T, V) then Query(T) returns V while T survives.
//! 2. **Collision eviction**: a later same-index submission evicts the old
//!    timestamp; the old query rejects, the new one serves.
//! 3. **Access isolation**: non-designated callers are always queries.
//! 4. **Length enforcement**: only exactly-32-byte query payloads pass.
//! 5. **Failure equivalence**: all rejection causes are indistinguishable.
//! 6. **Mutation atomicity**: a rejected invocation changes no slot.
//! 7. **Idempotent resubmission**: resubmitting the same pair is a no-op.

#[cfg(test)]
mod tests {
    use history_oracle::prelude::*;
    use primitive_types::U256;
    use rand::Rng;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const READER: CallerId = CallerId([0x11; 20]);

    /// 32-byte query payload for a native timestamp.
    fn query_payload(t: u64) -> [u8; 32] {
        Timestamp::new(t).to_word().0
    }

    /// Submission payload carrying a single repeated byte as the value word.
    fn value_word(byte: u8) -> [u8; 32] {
        [byte; 32]
    }

    // =============================================================================
    // ROUND-TRIP
    // =============================================================================

    #[test]
    fn test_round_trip_submit_then_query() {
        let (mut oracle, _clock) = create_test_service(1000);
        oracle.invoke(DESIGNATED_SUBMITTER, &value_word(0xaa)).unwrap();

        let out = oracle.invoke(READER, &query_payload(1000)).unwrap();
        assert_eq!(out, InvocationOutput::Value(Word::new(value_word(0xaa))));
    }

    #[test]
    fn test_round_trip_random_timestamps() {
        let mut rng = rand::thread_rng();
        let (mut oracle, clock) = create_test_service(0);

        for _ in 0..64 {
            let t: u64 = rng.gen();
            let mut value = [0u8; 32];
            rng.fill(&mut value);

            clock.set(t);
            oracle.invoke(DESIGNATED_SUBMITTER, &value).unwrap();

            let out = oracle.invoke(READER, &query_payload(t)).unwrap();
            assert_eq!(out, InvocationOutput::Value(Word::new(value)));
        }
    }

    #[test]
    fn test_round_trip_survives_unrelated_submissions() {
        let (mut oracle, clock) = create_test_service(1000);
        oracle.invoke(DESIGNATED_SUBMITTER, &value_word(0xaa)).unwrap();

        // Later submissions on other indices leave index 1000 untouched.
        for t in 1001..1010 {
            clock.set(t);
            oracle.invoke(DESIGNATED_SUBMITTER, &value_word(0xcc)).unwrap();
        }

        let out = oracle.invoke(READER, &query_payload(1000)).unwrap();
        assert_eq!(out, InvocationOutput::Value(Word::new(value_word(0xaa))));
    }

    // =============================================================================
    // COLLISION EVICTION
    // =============================================================================

    #[test]
    fn test_collision_evicts_old_timestamp() {
        let (mut oracle, clock) = create_test_service(1000);
        oracle.invoke(DESIGNATED_SUBMITTER, &value_word(0xaa)).unwrap();

        // 99304 = 1000 + RING_MODULUS shares index 1000.
        clock.set(1000 + RING_MODULUS);
        oracle.invoke(DESIGNATED_SUBMITTER, &value_word(0xbb)).unwrap();

        assert_eq!(oracle.invoke(READER, &query_payload(1000)), Err(Rejected));
        let out = oracle
            .invoke(READER, &query_payload(1000 + RING_MODULUS))
            .unwrap();
        assert_eq!(out, InvocationOutput::Value(Word::new(value_word(0xbb))));
    }

    #[test]
    fn test_retention_window_is_modulus_time_units() {
        let (mut oracle, clock) = create_test_service(5000);
        oracle.invoke(DESIGNATED_SUBMITTER, &value_word(0xaa)).unwrap();

        // One unit short of a full cycle: different index, no eviction.
        clock.set(5000 + RING_MODULUS - 1);
        oracle.invoke(DESIGNATED_SUBMITTER, &value_word(0xbb)).unwrap();
        assert!(oracle.invoke(READER, &query_payload(5000)).is_ok());

        // Exactly one full cycle later: same index, evicted.
        clock.set(5000 + RING_MODULUS);
        oracle.invoke(DESIGNATED_SUBMITTER, &value_word(0xcc)).unwrap();
        assert_eq!(oracle.invoke(READER, &query_payload(5000)), Err(Rejected));
    }

    // =============================================================================
    // ACCESS ISOLATION
    // =============================================================================

    #[test]
    fn test_non_designated_caller_is_always_a_query() {
        let (mut oracle, _clock) = create_test_service(1000);

        // A submit-shaped payload from an ordinary caller must be treated as
        // a query: 32 bytes long, so it passes length validation and then
        // fails the timestamp check against the empty ring.
        let result = oracle.invoke(READER, &value_word(0xaa));
        assert_eq!(result, Err(Rejected));
        assert_eq!(oracle.stats().submissions, 0);
        assert_eq!(oracle.store().written_slots(), 0);
    }

    #[test]
    fn test_near_miss_identity_is_not_privileged() {
        let (mut oracle, _clock) = create_test_service(1000);

        let mut id = *DESIGNATED_SUBMITTER.as_bytes();
        id[0] = 0x00;
        let result = oracle.invoke(CallerId::new(id), &value_word(0xaa));

        assert_eq!(result, Err(Rejected));
        assert_eq!(oracle.store().written_slots(), 0);
    }

    // =============================================================================
    // LENGTH ENFORCEMENT
    // =============================================================================

    #[test]
    fn test_query_length_must_be_exactly_32() {
        let (mut oracle, _clock) = create_test_service(1000);
        oracle.invoke(DESIGNATED_SUBMITTER, &value_word(0xaa)).unwrap();

        for len in [0usize, 1, 16, 31, 33, 48, 64, 1024] {
            // Content that would otherwise be valid is irrelevant.
            let mut payload = vec![0u8; len];
            let good = query_payload(1000);
            let n = len.min(32);
            payload[..n].copy_from_slice(&good[..n]);

            assert_eq!(
                oracle.invoke(READER, &payload),
                Err(Rejected),
                "length {len} must reject"
            );
        }

        // The exact length still works.
        assert!(oracle.invoke(READER, &query_payload(1000)).is_ok());
    }

    // =============================================================================
    // FAILURE EQUIVALENCE
    // =============================================================================

    #[test]
    fn test_bad_length_and_stale_reject_identically() {
        let (mut oracle, _clock) = create_test_service(1000);
        oracle.invoke(DESIGNATED_SUBMITTER, &value_word(0xaa)).unwrap();

        let bad_length = oracle.invoke(READER, &[0u8; 31]);
        let stale = oracle.invoke(READER, &query_payload(99_999));

        // Same error value, zero output in both: the caller cannot tell the
        // causes apart.
        assert_eq!(bad_length, stale);
        assert_eq!(bad_length, Err(Rejected));
    }

    // =============================================================================
    // MUTATION ATOMICITY
    // =============================================================================

    #[test]
    fn test_rejected_query_leaves_store_untouched() {
        let (mut oracle, _clock) = create_test_service(1000);
        oracle.invoke(DESIGNATED_SUBMITTER, &value_word(0xaa)).unwrap();

        let before = oracle.store().snapshot();

        let _ = oracle.invoke(READER, &[0u8; 31]);
        let _ = oracle.invoke(READER, &query_payload(99_999));
        let _ = oracle.invoke(READER, &[0u8; 0]);

        assert_eq!(oracle.store().snapshot(), before);
    }

    #[test]
    fn test_successful_query_leaves_store_untouched() {
        let (mut oracle, _clock) = create_test_service(1000);
        oracle.invoke(DESIGNATED_SUBMITTER, &value_word(0xaa)).unwrap();

        let before = oracle.store().snapshot();
        oracle.invoke(READER, &query_payload(1000)).unwrap();

        assert_eq!(oracle.store().snapshot(), before);
    }

    // =============================================================================
    // IDEMPOTENT RESUBMISSION
    // =============================================================================

    #[test]
    fn test_resubmission_is_idempotent() {
        let (mut oracle, _clock) = create_test_service(1000);
        oracle.invoke(DESIGNATED_SUBMITTER, &value_word(0xaa)).unwrap();
        let after_first = oracle.store().snapshot();

        oracle.invoke(DESIGNATED_SUBMITTER, &value_word(0xaa)).unwrap();

        assert_eq!(oracle.store().snapshot(), after_first);
        let out = oracle.invoke(READER, &query_payload(1000)).unwrap();
        assert_eq!(out, InvocationOutput::Value(Word::new(value_word(0xaa))));
    }

    // =============================================================================
    // CONCRETE SCENARIO
    // =============================================================================

    /// The worked five-step scenario, asserted against both the API and the
    /// raw store contents.
    #[test]
    fn test_concrete_scenario() {
        let (mut oracle, clock) = create_test_service(1000);
        let v_aa = Word::new(value_word(0xaa));
        let v_bb = Word::new(value_word(0xbb));

        // 1. Submit(T=1000, V=0xAA..AA)
        oracle.invoke(DESIGNATED_SUBMITTER, v_aa.as_bytes()).unwrap();
        assert_eq!(oracle.store().get(1000), Timestamp::new(1000).to_word());
        assert_eq!(oracle.store().get(99_304), v_aa);

        // 2. Query(1000) succeeds.
        let out = oracle.invoke(READER, &query_payload(1000)).unwrap();
        assert_eq!(out, InvocationOutput::Value(v_aa));

        // 3. Query(99304): reduces to index 1000, stored timestamp differs.
        assert_eq!(oracle.invoke(READER, &query_payload(99_304)), Err(Rejected));

        // 4. Submit(T=99304, V=0xBB..BB) overwrites the pair.
        clock.set(99_304);
        oracle.invoke(DESIGNATED_SUBMITTER, v_bb.as_bytes()).unwrap();
        assert_eq!(oracle.store().get(1000), Timestamp::new(99_304).to_word());
        assert_eq!(oracle.store().get(99_304), v_bb);

        // 5. Roles swap: 1000 rejects, 99304 serves.
        assert_eq!(oracle.invoke(READER, &query_payload(1000)), Err(Rejected));
        let out = oracle.invoke(READER, &query_payload(99_304)).unwrap();
        assert_eq!(out, InvocationOutput::Value(v_bb));
    }

    // =============================================================================
    // FIXED-WIDTH SEMANTICS
    // =============================================================================

    #[test]
    fn test_wide_query_timestamp_cannot_alias_stored_one() {
        let (mut oracle, _clock) = create_test_service(1000);
        oracle.invoke(DESIGNATED_SUBMITTER, &value_word(0xaa)).unwrap();

        // 1000 + RING_MODULUS * 2^64 reduces to index 1000 but is a
        // different timestamp, so the full-word comparison must reject.
        let wide = (U256::from(RING_MODULUS) << 64) + U256::from(1000u64);
        assert_eq!(time_index(wide), 1000);

        let payload = Word::from_u256(wide).0;
        assert_eq!(oracle.invoke(READER, &payload), Err(Rejected));
    }

    #[test]
    fn test_hex_fixture_round_trip() {
        let (mut oracle, _clock) = create_test_service(1000);

        let value: [u8; 32] =
            hex::decode("deadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef")
                .unwrap()
                .try_into()
                .unwrap();
        oracle.invoke(DESIGNATED_SUBMITTER, &value).unwrap();

        let out = oracle.invoke(READER, &query_payload(1000)).unwrap();
        assert_eq!(out, InvocationOutput::Value(Word::new(value)));
    }

    // =============================================================================
    // INVARIANT AUDIT
    // =============================================================================

    #[test]
    fn test_slot_pairs_stay_bound_under_random_load() {
        let mut rng = rand::thread_rng();
        let (mut oracle, clock) = create_test_service(0);

        for _ in 0..256 {
            let t: u64 = rng.gen();
            let mut value = [0u8; 32];
            rng.fill(&mut value);

            clock.set(t);
            oracle.invoke(DESIGNATED_SUBMITTER, &value).unwrap();
        }

        let store = oracle.store().clone();
        let check = audit_slot_pairs(|index| store.get(index));
        assert!(check.is_valid());
    }
}
