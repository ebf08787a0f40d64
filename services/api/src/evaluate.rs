use crate::cli::ScoringOverrides;
use crate::infra::{apply_overrides, build_scoring_service, load_catalog, parse_label};
use clap::Args;
use credit_risk::config::AppConfig;
use credit_risk::error::AppError;
use credit_risk::underwriting::{
    format_rupiah, BlacklistStatus, DebtorType, EvaluationReport, HousingStatus,
    LoanApplicationForm, OccupationGroup,
};

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Vehicle model exactly as listed by the `vehicles` command
    #[arg(long)]
    pub(crate) vehicle: String,
    /// Total monthly income (Rp)
    #[arg(long)]
    pub(crate) income: f64,
    /// Down payment as a percentage of the price
    #[arg(long, default_value_t = 30.0)]
    pub(crate) dp: f64,
    /// Annual interest rate (%)
    #[arg(long, default_value_t = 4.5)]
    pub(crate) rate: f64,
    /// Tenor in months
    #[arg(long, default_value_t = 60)]
    pub(crate) tenor: u32,
    /// Applicant age in years
    #[arg(long, default_value_t = 30)]
    pub(crate) age: u32,
    /// Occupation group, e.g. "Kelompok A"
    #[arg(long, value_parser = parse_label::<OccupationGroup>)]
    pub(crate) occupation: OccupationGroup,
    /// Blacklist status: "Ada" or "Tidak Ada"
    #[arg(long, value_parser = parse_label::<BlacklistStatus>)]
    pub(crate) blacklist: BlacklistStatus,
    /// Debtor type: "Baru" or "Lama"
    #[arg(long, value_parser = parse_label::<DebtorType>)]
    pub(crate) debtor: DebtorType,
    /// Number of dependents
    #[arg(long, default_value_t = 2)]
    pub(crate) dependents: u32,
    /// Housing status: "Milik Sendiri" or "Milik Orang Tua"
    #[arg(long, value_parser = parse_label::<HousingStatus>)]
    pub(crate) housing: HousingStatus,
    #[command(flatten)]
    pub(crate) scoring: ScoringOverrides,
}

#[derive(Args, Debug, Default)]
pub(crate) struct VehiclesArgs {
    /// Print the catalog as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

impl EvaluateArgs {
    fn form(&self) -> LoanApplicationForm {
        LoanApplicationForm {
            vehicle_name: self.vehicle.clone(),
            monthly_income: self.income,
            down_payment_percent: self.dp,
            annual_interest_rate_percent: self.rate,
            tenor_months: self.tenor,
            age: self.age,
            occupation: self.occupation,
            blacklist: self.blacklist,
            debtor_type: self.debtor,
            dependents: self.dependents,
            housing: self.housing,
        }
    }
}

pub(crate) fn run_evaluation(args: EvaluateArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    apply_overrides(&mut config, args.scoring.clone());

    let service = build_scoring_service(&config)?;
    let report = service.evaluate(args.form())?;

    print!("{}", render_report(&report));
    Ok(())
}

pub(crate) fn list_vehicles(args: VehiclesArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = load_catalog(&config)?;

    if args.json {
        match serde_json::to_string_pretty(catalog.listings()) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Vehicle catalog unavailable: {err}"),
        }
        return Ok(());
    }

    println!("Vehicle price list");
    for listing in catalog.listings() {
        println!("- {}: {}", listing.name, format_rupiah(listing.price));
    }
    Ok(())
}

pub(crate) fn render_report(report: &EvaluationReport) -> String {
    let mut lines = vec![
        "Credit risk evaluation".to_string(),
        String::new(),
        "Calculation".to_string(),
        format!("- Vehicle: {}", report.vehicle_name),
        format!("- Vehicle price: {}", format_rupiah(report.price)),
        format!("- Down payment: {}", format_rupiah(report.down_payment)),
        format!("- Credit amount: {}", format_rupiah(report.credit_amount)),
        format!("- Monthly installment: {}", format_rupiah(report.monthly_payment)),
        format!("- Total interest: {}", format_rupiah(report.total_interest)),
        format!("- Debt-to-income ratio: {}", report.debt_to_income_display()),
        String::new(),
        "Prediction".to_string(),
        format!(
            "- Risk: {} ({} = current, 1 = default)",
            report.label.label(),
            report.label_code
        ),
        format!("- Default probability: {:.2}", report.default_probability),
        format!("- Decision threshold: {:.2}", report.threshold),
        String::new(),
        report.advisory.clone(),
    ];
    lines.push(String::new());
    lines.join("\n")
}
