use std::str::FromStr;

use money_api::config::AppConfig;
use money_api::transfer::{PairVerdict, Phase};
use money_api::{TransferError, TransferRequest, TransferStatus};
use rust_decimal::Decimal;

#[test]
fn qa_provider_status_vocabulary() {
    for s in ["COMPLETED", "success", " Succeeded ", "SETTLED"] {
        assert_eq!(
            TransferStatus::from_provider(s),
            Some(TransferStatus::Completed),
            "{}",
            s
        );
    }
    for s in ["FAILED", "failure", "Rejected", "DECLINED"] {
        assert_eq!(
            TransferStatus::from_provider(s),
            Some(TransferStatus::Failed),
            "{}",
            s
        );
    }

    // A callback must settle the transfer; PENDING is not a valid report
    assert_eq!(TransferStatus::from_provider("PENDING"), None);
    assert_eq!(TransferStatus::from_provider("processing"), None);
}

#[test]
fn qa_status_is_monotone() {
    assert!(TransferStatus::Pending.can_transition_to(TransferStatus::Completed));
    assert!(TransferStatus::Pending.can_transition_to(TransferStatus::Failed));
    assert!(!TransferStatus::Completed.can_transition_to(TransferStatus::Failed));
    assert!(!TransferStatus::Failed.can_transition_to(TransferStatus::Completed));
    assert!(!TransferStatus::Pending.can_transition_to(TransferStatus::Pending));
}

#[test]
fn qa_transfer_request_input_rules() {
    let amount = Decimal::from_str("100.00").unwrap();
    assert!(TransferRequest::new("A", "B", amount).check().is_ok());

    let err = TransferRequest::new("A", "B", Decimal::ZERO).check().unwrap_err();
    assert_eq!(err.http_status(), 400);

    let err = TransferRequest::new("A", "A", amount).check().unwrap_err();
    assert_eq!(err.code(), "SAME_ACCOUNT");
}

#[test]
fn qa_rejections_name_the_failing_leg() {
    assert!(PairVerdict::Valid.into_result().is_ok());
    let err = PairVerdict::SourceInvalid.into_result().unwrap_err();
    assert_eq!(err.to_string(), "source account invalid");
    assert_eq!(err.http_status(), 500);
    assert!(matches!(
        PairVerdict::DestinationInvalid.into_result(),
        Err(TransferError::ValidationFailure("destination"))
    ));
}

#[test]
fn qa_phase_labels() {
    assert_eq!(Phase::Validating.to_string(), "VALIDATING");
    assert_eq!(Phase::Done.as_str(), "DONE");
}

#[test]
fn qa_shipped_configs_parse() {
    let dev = AppConfig::from_file("config/dev.yaml").unwrap();
    assert_eq!(dev.gateway.port, 8080);
    assert!(dev.postgres_url.is_some());

    let prod = AppConfig::from_file("config/prod.yaml").unwrap();
    assert!(prod.use_json);
    assert!(prod.ack_worker.workers >= 1);
}
