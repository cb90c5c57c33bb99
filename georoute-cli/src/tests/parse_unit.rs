//! Argument parsing for every subcommand.

use super::*;
use camino::Utf8PathBuf;
use rstest::rstest;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("georoute").chain(args.iter().copied()))
}

#[rstest]
fn optimize_takes_a_request_path() {
    let cli = parse(&["optimize", "trip.json"]).expect("arguments should parse");
    assert!(matches!(
        cli.command,
        Command::Optimize(args) if args.request_path == Utf8PathBuf::from("trip.json")
    ));
}

#[rstest]
fn lodging_takes_a_request_path() {
    let cli = parse(&["lodging", "stops.json"]).expect("arguments should parse");
    assert!(matches!(
        cli.command,
        Command::Lodging(args) if args.request_path == Utf8PathBuf::from("stops.json")
    ));
}

#[rstest]
fn export_accepts_output_and_document_options() {
    let cli = parse(&[
        "export",
        "trip.json",
        "--output",
        "out/trip.pdf",
        "--title",
        "Weekend",
        "--page-size",
        "letter",
    ])
    .expect("arguments should parse");
    let Command::Export(args) = cli.command else {
        panic!("expected the export subcommand");
    };
    assert_eq!(args.request_path, Some(Utf8PathBuf::from("trip.json")));
    assert_eq!(args.output, Some(Utf8PathBuf::from("out/trip.pdf")));
    assert_eq!(args.title.as_deref(), Some("Weekend"));
    assert_eq!(args.page_size.as_deref(), Some("letter"));
}

#[rstest]
fn serve_collects_repeated_origins() {
    let cli = parse(&[
        "serve",
        "--bind",
        "0.0.0.0:9000",
        "--cors-origin",
        "http://a.test",
        "--cors-origin",
        "http://b.test",
        "--optimize-timeout-ms",
        "2500",
    ])
    .expect("arguments should parse");
    let Command::Serve(args) = cli.command else {
        panic!("expected the serve subcommand");
    };
    assert_eq!(args.bind.as_deref(), Some("0.0.0.0:9000"));
    assert_eq!(
        args.cors_origin,
        Some(vec!["http://a.test".to_owned(), "http://b.test".to_owned()])
    );
    assert_eq!(args.optimize_timeout_ms, Some(2500));
}

#[rstest]
#[case("debug", LevelFilter::Debug)]
#[case("WARN", LevelFilter::Warn)]
#[case("off", LevelFilter::Off)]
fn log_level_is_global(#[case] value: &str, #[case] expected: LevelFilter) {
    let cli = parse(&["optimize", "trip.json", "--log-level", value]).expect("arguments should parse");
    assert_eq!(cli.log_level, expected);
}

#[rstest]
#[case::no_subcommand(&[])]
#[case::missing_path(&["optimize"])]
#[case::unknown_subcommand(&["plan"])]
#[case::bad_log_level(&["optimize", "trip.json", "--log-level", "loud"])]
fn invalid_invocations_are_rejected(#[case] args: &[&str]) {
    assert!(parse(args).is_err());
}
