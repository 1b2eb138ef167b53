use clap::Parser;
use cloudwatch_metrics_check::config::{CheckConfig, CloudwatchConfig, Requirement};
use cloudwatch_metrics_check::main_runner;
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(about = "List CloudWatch metrics and report as a monitoring check")]
struct Opt {
    /// Metric namespace
    #[arg(short, long, env = "CLOUDWATCH_CHECK_NAMESPACE")]
    namespace: Option<String>,

    /// Metric name
    #[arg(short = 'N', long, env = "CLOUDWATCH_CHECK_METRIC_NAME")]
    metric_name: Option<String>,

    /// Comma-separated dimension filters, name=value
    #[arg(short = 'd', long, env = "CLOUDWATCH_CHECK_METRIC_DIMENSIONS")]
    metric_dimensions: Option<String>,

    /// Maximum number of result pages
    #[arg(
        short,
        long,
        env = "CLOUDWATCH_CHECK_MAX_PAGES",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_pages: u32,

    /// Which filter arguments are mandatory
    #[arg(short, long, env = "CLOUDWATCH_CHECK_REQUIRE", value_enum, default_value_t = Requirement::None)]
    require: Requirement,

    /// AWS region, defaults to the provider chain
    #[arg(long, env = "AWS_REGION")]
    region: Option<String>,

    /// AWS shared config profile
    #[arg(long, env = "AWS_PROFILE")]
    profile: Option<String>,

    /// Enable verbose output
    #[arg(short, long, env = "CLOUDWATCH_CHECK_VERBOSE")]
    verbose: bool,
}

impl From<Opt> for CheckConfig {
    fn from(opt: Opt) -> Self {
        CheckConfig {
            namespace: opt.namespace,
            metric_name: opt.metric_name,
            metric_dimensions: opt.metric_dimensions,
            max_pages: opt.max_pages,
            required: opt.require.into(),
            cloudwatch: CloudwatchConfig {
                region: opt.region,
                profile: opt.profile,
            },
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let opt = Opt::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if opt.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let stdout = std::io::stdout();
    let outcome = main_runner(opt.into(), &mut stdout.lock()).await;
    outcome.print_and_exit();
}
