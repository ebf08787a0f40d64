//! End-to-end scoring against the sample artifacts shipped in `artifacts/`.
//!
//! Scenarios go through the public service facade and artifact loader so the
//! on-disk contract (file names, JSON layout, schema validation) is covered.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use credit_risk::underwriting::{
    ArtifactBundle, ArtifactError, BlacklistStatus, CreditScoringService, CreditServiceError,
    DebtorType, HousingStatus, LoanApplicationForm, OccupationGroup, RiskEngine, RiskLabel,
    RiskThreshold, ScoringConfig, ScoringError, VehicleCatalog, ZeroIncomePolicy,
};

fn artifact_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../artifacts")
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("credit-risk-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("scratch dir");
    dir
}

fn service(threshold: f64) -> CreditScoringService {
    let bundle = ArtifactBundle::load(artifact_dir()).expect("sample artifacts load");
    let config = ScoringConfig {
        threshold: RiskThreshold::new(threshold).expect("valid threshold"),
        zero_income_policy: ZeroIncomePolicy::Undefined,
    };
    let engine = RiskEngine::new(Arc::new(bundle), config);
    CreditScoringService::new(Arc::new(engine), Arc::new(VehicleCatalog::standard()))
}

fn form() -> LoanApplicationForm {
    LoanApplicationForm {
        vehicle_name: "Mazda 2".to_string(),
        monthly_income: 15_000_000.0,
        down_payment_percent: 30.0,
        annual_interest_rate_percent: 4.5,
        tenor_months: 60,
        age: 30,
        occupation: OccupationGroup::GroupB,
        blacklist: BlacklistStatus::NotListed,
        debtor_type: DebtorType::New,
        dependents: 2,
        housing: HousingStatus::Owned,
    }
}

#[test]
fn reference_applicant_is_affordable_and_current() {
    let report = service(0.5).evaluate(form()).expect("evaluates");

    assert_eq!(report.down_payment, 111_330_000.0);
    assert_eq!(report.credit_amount, 259_770_000.0);
    assert!((report.monthly_payment - 4_843_000.0).abs() < 1_000.0);
    let dti = report.debt_to_income_percent.expect("income is positive");
    assert!((dti - 32.3).abs() < 0.1);
    assert!((0.0..=1.0).contains(&report.default_probability));
    assert_eq!(report.label, RiskLabel::Current);
    assert_eq!(report.debt_to_income_display(), "32.29%");
}

#[test]
fn blacklist_raises_default_probability() {
    let service = service(0.5);
    let clean = service.evaluate(form()).expect("evaluates");

    let mut listed = form();
    listed.blacklist = BlacklistStatus::Listed;
    let flagged = service.evaluate(listed).expect("evaluates");

    assert!(flagged.default_probability > clean.default_probability);
    assert_eq!(flagged.label, RiskLabel::Default);
    assert!(flagged.advisory.starts_with("Warning"));
}

#[test]
fn every_catalog_vehicle_is_known_to_the_encoder() {
    let service = service(0.5);
    for listing in VehicleCatalog::standard().listings() {
        let mut form = form();
        form.vehicle_name = listing.name.clone();
        let report = service.evaluate(form).expect("vehicle encodes");
        assert_eq!(report.price, listing.price);
    }
}

#[test]
fn lower_threshold_reproduces_stricter_variant() {
    let lenient = service(0.5);
    let strict = service(0.04);

    let lenient_report = lenient.evaluate(form()).expect("evaluates");
    let strict_report = strict.evaluate(form()).expect("evaluates");

    assert_eq!(
        lenient_report.default_probability,
        strict_report.default_probability
    );
    assert_eq!(lenient_report.label, RiskLabel::Current);
    assert_eq!(strict_report.label, RiskLabel::Default);
}

#[test]
fn zero_tenor_is_rejected_as_input_error() {
    let mut form = form();
    form.tenor_months = 0;

    match service(0.5).evaluate(form) {
        Err(error @ CreditServiceError::Form(_)) => assert!(error.is_input_error()),
        other => panic!("expected form rejection, got {other:?}"),
    }
}

#[test]
fn vehicle_missing_from_training_vocabulary_is_unknown_category() {
    let bundle = ArtifactBundle::load(artifact_dir()).expect("sample artifacts load");
    let engine = RiskEngine::new(Arc::new(bundle), ScoringConfig::default());
    let catalog = VehicleCatalog::from_reader("name,price\nMazda BT-50,520000000\n".as_bytes())
        .expect("catalog parses");
    let service = CreditScoringService::new(Arc::new(engine), Arc::new(catalog));

    let mut form = form();
    form.vehicle_name = "Mazda BT-50".to_string();

    match service.evaluate(form) {
        Err(CreditServiceError::Scoring(ScoringError::UnknownCategory(error))) => {
            assert_eq!(error.column, "NAME_CAR");
            assert_eq!(error.value, "Mazda BT-50");
        }
        other => panic!("expected unknown category, got {other:?}"),
    }
}

#[test]
fn missing_artifact_is_reported_by_path() {
    let dir = scratch_dir("missing");
    std::fs::copy(artifact_dir().join("model.json"), dir.join("model.json")).expect("copy");

    match ArtifactBundle::load(&dir) {
        Err(ArtifactError::Missing { path }) => assert!(path.ends_with("scaler.json")),
        other => panic!("expected missing artifact, got {other:?}"),
    }
}

#[test]
fn corrupt_artifact_is_fatal() {
    let dir = scratch_dir("corrupt");
    for file in ["model.json", "scaler.json"] {
        std::fs::copy(artifact_dir().join(file), dir.join(file)).expect("copy");
    }
    std::fs::write(dir.join("encoders.json"), "{ not json").expect("write");

    assert!(matches!(
        ArtifactBundle::load(&dir),
        Err(ArtifactError::Corrupt { .. })
    ));
}
