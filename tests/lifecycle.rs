//! End-to-end lifecycle tests driving the service through the public API.

use ip_dispute_registry::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn owner() -> Principal {
    Principal::new("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")
}

fn holder() -> Principal {
    Principal::new("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG")
}

fn infringer() -> Principal {
    Principal::new("ST2JHG361ZXG51QTKY2NQCVBPPRRE2KZB1HR05NNC")
}

fn standard_report() -> CaseReport {
    CaseReport {
        patent_id: PatentId::new(1),
        alleged_infringer: infringer(),
        description: "Unauthorized use of patented technology".to_string(),
        severity: Severity::High,
        damages_claimed: 1_000_000,
    }
}

#[tokio::test]
async fn full_dispute_lifecycle_to_settlement() {
    init_tracing();
    let (service, patents, height) = create_test_service(owner());
    patents.grant(PatentId::new(1), holder());

    // Report.
    let case_id = service
        .report_infringement(holder(), standard_report())
        .await
        .unwrap();
    assert_eq!(case_id, CaseId::new(1));

    let case = service.get_case(case_id).await.unwrap();
    assert_eq!(case.status, CaseStatus::Reported);
    assert_eq!(case.severity, Severity::High);
    assert_eq!(case.damages_claimed, 1_000_000);
    assert!(case.resolution_date.is_none());

    // Evidence from the patent holder advances the case.
    height.advance(3);
    let evidence_id = service
        .submit_evidence(
            holder(),
            case_id,
            EvidenceType::Documentation,
            "Product comparison showing infringement".to_string(),
        )
        .await
        .unwrap();
    assert_eq!(
        service.get_case(case_id).await.unwrap().status,
        CaseStatus::EvidenceSubmitted
    );

    let evidence = service.get_evidence(case_id, evidence_id).await.unwrap();
    assert_eq!(evidence.evidence_type, EvidenceType::Documentation);
    assert_eq!(evidence.submitted_by, holder());
    assert!(!evidence.verified);

    // Only the contract owner verifies evidence.
    let err = service
        .verify_evidence(holder(), case_id, evidence_id, true)
        .await
        .unwrap_err();
    assert_eq!(err.code(), 100);

    service
        .verify_evidence(owner(), case_id, evidence_id, true)
        .await
        .unwrap();
    assert!(service.get_evidence(case_id, evidence_id).await.unwrap().verified);

    // Enforcement.
    service
        .initiate_enforcement(holder(), case_id, ActionType::CeaseAndDesist)
        .await
        .unwrap();
    assert_eq!(
        service.get_case(case_id).await.unwrap().status,
        CaseStatus::EnforcementInitiated
    );

    let action = service.get_enforcement_action(case_id).await.unwrap();
    assert_eq!(action.action_type, ActionType::CeaseAndDesist);
    assert_eq!(action.target, infringer());
    assert_eq!(action.status, ActionStatus::Initiated);

    // Settlement proposal and bilateral acceptance.
    service
        .propose_settlement(
            holder(),
            case_id,
            500_000,
            "Licensing agreement with ongoing royalties".to_string(),
        )
        .await
        .unwrap();
    assert_eq!(
        service.get_case(case_id).await.unwrap().status,
        CaseStatus::SettlementProposed
    );

    service.accept_settlement(infringer(), case_id).await.unwrap();
    let settlement = service.get_settlement(case_id).await.unwrap();
    assert!(settlement.agreed_by_infringer);
    assert!(!settlement.agreed_by_patent_holder);
    assert!(settlement.settlement_date.is_none());
    assert!(!service.is_resolved(case_id).await);

    height.advance(10);
    service.accept_settlement(holder(), case_id).await.unwrap();

    let case = service.get_case(case_id).await.unwrap();
    assert_eq!(case.status, CaseStatus::Resolved);
    assert_eq!(case.resolution_date, Some(height.current_height()));
    assert!(service.is_resolved(case_id).await);

    let settlement = service.get_settlement(case_id).await.unwrap();
    assert!(settlement.agreed_by_patent_holder);
    assert_eq!(settlement.settlement_amount, 500_000);
    assert_eq!(settlement.settlement_date, Some(height.current_height()));

    // Settlement execution concludes the open enforcement action.
    let action = service.get_enforcement_action(case_id).await.unwrap();
    assert_eq!(action.status, ActionStatus::Concluded);
    assert_eq!(action.outcome.as_deref(), Some("settled"));
}

#[tokio::test]
async fn case_ids_are_monotonic() {
    let (service, patents, _height) = create_test_service(owner());
    for patent in 1..=3 {
        patents.grant(PatentId::new(patent), holder());
        let mut report = standard_report();
        report.patent_id = PatentId::new(patent);
        let id = service.report_infringement(holder(), report).await.unwrap();
        assert_eq!(id, CaseId::new(patent));
    }
    assert_eq!(service.total_cases().await, 3);
}

#[tokio::test]
async fn attorney_registration_and_verification() {
    let (service, _patents, _height) = create_test_service(owner());
    let attorney = Principal::new("ST3AM1A56AK2C1XAFJ4115ZSV26EB49BVQ10MGCS0");

    let id = service
        .register_attorney(
            attorney.clone(),
            AttorneyProfile {
                name: "John Doe".to_string(),
                specialization: "Patent Attorney".to_string(),
                bar_number: "BAR123456".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(id, AttorneyId::new(1));

    let record = service.get_attorney(id).await.unwrap();
    assert_eq!(record.principal, attorney);
    assert_eq!(record.status, AttorneyStatus::Pending);
    assert!(!record.verified);
    assert!(!service.is_attorney_verified(id).await);

    // Same principal cannot register twice.
    let err = service
        .register_attorney(
            attorney.clone(),
            AttorneyProfile {
                name: "John Doe".to_string(),
                specialization: "Trademark Attorney".to_string(),
                bar_number: "BAR654321".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), 102);
    assert_eq!(service.total_attorneys().await, 1);

    // Verification is owner-only.
    let err = service
        .verify_attorney(attorney, id, AttorneyStatus::Verified)
        .await
        .unwrap_err();
    assert_eq!(err.code(), 100);

    service
        .verify_attorney(owner(), id, AttorneyStatus::Verified)
        .await
        .unwrap();
    assert!(service.is_attorney_verified(id).await);
    assert!(service.get_attorney(id).await.unwrap().verified);

    // Suspension clears the derived flag.
    service
        .update_attorney_status(owner(), id, AttorneyStatus::Suspended)
        .await
        .unwrap();
    assert!(!service.is_attorney_verified(id).await);
}

#[tokio::test]
async fn unknown_attorney_is_101() {
    let (service, _patents, _height) = create_test_service(owner());
    let err = service
        .verify_attorney(owner(), AttorneyId::new(42), AttorneyStatus::Verified)
        .await
        .unwrap_err();
    assert_eq!(err.code(), 101);
    assert!(service.get_attorney(AttorneyId::new(42)).await.is_none());
    assert!(!service.is_attorney_verified(AttorneyId::new(42)).await);
}

#[tokio::test]
async fn strangers_cannot_touch_a_case() {
    let (service, patents, _height) = create_test_service(owner());
    patents.grant(PatentId::new(1), holder());
    let case_id = service
        .report_infringement(holder(), standard_report())
        .await
        .unwrap();

    let stranger = Principal::new("ST3NBRSFKX28FQ2ZJ1MAKX58HKHSDGNV5N7R21XCP");

    let err = service
        .submit_evidence(
            stranger.clone(),
            case_id,
            EvidenceType::Testimony,
            "hearsay".to_string(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), 100);

    let err = service
        .propose_settlement(stranger.clone(), case_id, 1, "terms".to_string())
        .await
        .unwrap_err();
    assert_eq!(err.code(), 100);

    let err = service.accept_settlement(stranger, case_id).await.unwrap_err();
    assert_eq!(err.code(), 100);
}

#[tokio::test]
async fn infringer_may_submit_evidence_but_not_enforce() {
    let (service, patents, _height) = create_test_service(owner());
    patents.grant(PatentId::new(1), holder());
    let case_id = service
        .report_infringement(holder(), standard_report())
        .await
        .unwrap();

    service
        .submit_evidence(
            infringer(),
            case_id,
            EvidenceType::TechnicalAnalysis,
            "Independent development records".to_string(),
        )
        .await
        .unwrap();

    let err = service
        .initiate_enforcement(infringer(), case_id, ActionType::Litigation)
        .await
        .unwrap_err();
    assert_eq!(err.code(), 100);
    assert!(service.get_enforcement_action(case_id).await.is_none());
}

#[tokio::test]
async fn status_overrides_are_forward_only() {
    let (service, patents, _height) = create_test_service(owner());
    patents.grant(PatentId::new(1), holder());
    let case_id = service
        .report_infringement(holder(), standard_report())
        .await
        .unwrap();

    // Forward jump is allowed.
    service
        .update_case_status(holder(), case_id, CaseStatus::EnforcementInitiated)
        .await
        .unwrap();

    // Backward move is not.
    let err = service
        .update_case_status(holder(), case_id, CaseStatus::Reported)
        .await
        .unwrap_err();
    assert_eq!(err.code(), 107);

    // Resolution is reserved for settlement execution.
    let err = service
        .update_case_status(owner(), case_id, CaseStatus::Resolved)
        .await
        .unwrap_err();
    assert_eq!(err.code(), 107);

    // Dismissal is terminal.
    service
        .update_case_status(owner(), case_id, CaseStatus::Dismissed)
        .await
        .unwrap();
    let err = service
        .update_case_status(owner(), case_id, CaseStatus::SettlementProposed)
        .await
        .unwrap_err();
    assert_eq!(err.code(), 107);

    let err = service
        .submit_evidence(
            holder(),
            case_id,
            EvidenceType::Other,
            "late filing".to_string(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), 107);
}

#[tokio::test]
async fn reproposal_resets_agreement() {
    let (service, patents, _height) = create_test_service(owner());
    patents.grant(PatentId::new(1), holder());
    let case_id = service
        .report_infringement(holder(), standard_report())
        .await
        .unwrap();

    service
        .propose_settlement(holder(), case_id, 500_000, "first offer".to_string())
        .await
        .unwrap();
    service.accept_settlement(infringer(), case_id).await.unwrap();

    // A second acceptance by the same party is rejected.
    let err = service.accept_settlement(infringer(), case_id).await.unwrap_err();
    assert_eq!(err.code(), 107);

    // The counter-offer discards the earlier agreement.
    service
        .propose_settlement(infringer(), case_id, 250_000, "counter offer".to_string())
        .await
        .unwrap();
    let settlement = service.get_settlement(case_id).await.unwrap();
    assert_eq!(settlement.settlement_amount, 250_000);
    assert!(!settlement.agreed_by_infringer);
    assert!(!settlement.agreed_by_patent_holder);

    service.accept_settlement(infringer(), case_id).await.unwrap();
    service.accept_settlement(holder(), case_id).await.unwrap();
    assert!(service.is_resolved(case_id).await);
}

#[tokio::test]
async fn resolved_case_rejects_further_mutation() {
    let (service, patents, _height) = create_test_service(owner());
    patents.grant(PatentId::new(1), holder());
    let case_id = service
        .report_infringement(holder(), standard_report())
        .await
        .unwrap();

    service
        .propose_settlement(holder(), case_id, 100, "quick resolution".to_string())
        .await
        .unwrap();
    service.accept_settlement(infringer(), case_id).await.unwrap();
    service.accept_settlement(holder(), case_id).await.unwrap();

    let err = service
        .propose_settlement(holder(), case_id, 200, "too late".to_string())
        .await
        .unwrap_err();
    assert_eq!(err.code(), 107);

    let err = service.accept_settlement(infringer(), case_id).await.unwrap_err();
    assert_eq!(err.code(), 107);

    let err = service
        .initiate_enforcement(holder(), case_id, ActionType::Injunction)
        .await
        .unwrap_err();
    assert_eq!(err.code(), 107);
}

#[tokio::test]
async fn evidence_ids_order_by_height_then_sequence() {
    let (service, patents, height) = create_test_service(owner());
    patents.grant(PatentId::new(1), holder());
    let case_id = service
        .report_infringement(holder(), standard_report())
        .await
        .unwrap();

    let first = service
        .submit_evidence(
            holder(),
            case_id,
            EvidenceType::Documentation,
            "exhibit a".to_string(),
        )
        .await
        .unwrap();
    let second = service
        .submit_evidence(
            infringer(),
            case_id,
            EvidenceType::Documentation,
            "exhibit b".to_string(),
        )
        .await
        .unwrap();
    height.advance(1);
    let third = service
        .submit_evidence(
            holder(),
            case_id,
            EvidenceType::Testimony,
            "exhibit c".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(first.height, second.height);
    assert!(first < second);
    assert!(second < third);
    assert_eq!(third.seq, 0);

    // Each id resolves to its own entry.
    assert_eq!(
        service.get_evidence(case_id, first).await.unwrap().description,
        "exhibit a"
    );
    assert_eq!(
        service.get_evidence(case_id, second).await.unwrap().description,
        "exhibit b"
    );
}

#[tokio::test]
async fn event_stream_reflects_the_lifecycle() {
    let (service, patents, _height) = create_test_service(owner());
    patents.grant(PatentId::new(1), holder());
    let mut events = service.subscribe();

    let case_id = service
        .report_infringement(holder(), standard_report())
        .await
        .unwrap();
    service
        .submit_evidence(
            holder(),
            case_id,
            EvidenceType::Documentation,
            "exhibit".to_string(),
        )
        .await
        .unwrap();

    // A rejected call publishes nothing.
    let _ = service
        .initiate_enforcement(infringer(), case_id, ActionType::Litigation)
        .await;

    service
        .initiate_enforcement(holder(), case_id, ActionType::CeaseAndDesist)
        .await
        .unwrap();

    let kinds: Vec<_> = std::iter::from_fn(|| events.try_recv().ok())
        .map(|envelope| match envelope.event {
            RegistryEvent::CaseReported { .. } => "case-reported",
            RegistryEvent::EvidenceSubmitted { .. } => "evidence-submitted",
            RegistryEvent::EnforcementInitiated { .. } => "enforcement-initiated",
            _ => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["case-reported", "evidence-submitted", "enforcement-initiated"]
    );
}
