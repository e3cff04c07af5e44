// End-to-end scenarios: raw lines through the parser into the
// aggregator, then report queries.

use loganalyze_core::parsers::{HttpMethod, HttpProtocol};
use loganalyze_core::{parse, Error, LogFormat, ReportAggregator};
use pretty_assertions::assert_eq;

const CANONICAL: &str = "127.0.0.1 user-identifier frank [10/Nov/2000:13:55:36 -0700] \
                         \"GET /apache_pb.gif HTTP/1.0\" 200 2326";

#[test]
fn the_canonical_line_yields_a_perfect_report() {
    let record = parse(LogFormat::Clf, CANONICAL).unwrap();
    assert_eq!(record.host, "127.0.0.1");
    assert_eq!(record.identity, "user-identifier");
    assert_eq!(record.user, "frank");
    assert_eq!(record.time.to_rfc3339(), "2000-11-10T13:55:36-07:00");
    assert_eq!(record.request.method, HttpMethod::Get);
    assert_eq!(record.request.path, "/apache_pb.gif");
    assert_eq!(record.request.query, None);
    assert_eq!(record.request.protocol, HttpProtocol::V1_0);
    assert_eq!(record.status, "200");
    assert_eq!(record.size, Some(2326));

    let mut reporter = ReportAggregator::new();
    reporter.receive(&record).unwrap();

    assert_eq!(reporter.success_pct(), Some(100.0));
    let top = reporter.top_hosts(1);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name, "127.0.0.1");
    assert_eq!(top[0].num_requests(), 1);
}

#[test]
fn a_mixed_stream_aggregates_deterministically() {
    let lines = [
        "alpha - - [10/Nov/2000:13:55:36 -0700] \"GET /index.html HTTP/1.1\" 200 512",
        "alpha - - [10/Nov/2000:13:55:37 -0700] \"GET /index.html HTTP/1.1\" 200 512",
        "alpha - - [10/Nov/2000:13:55:38 -0700] \"GET /style.css HTTP/1.1\" 404 0",
        "beta - - [10/Nov/2000:13:56:00 -0700] \"POST /login?next=/home HTTP/1.1\" 302 128",
        "beta - - [10/Nov/2000:13:56:01 -0700] \"GET /index.html HTTP/1.1\" 500 64",
        "beta - - [10/Nov/2000:13:56:02 -0700] \"GET /index.html HTTP/1.1\" 200 512",
    ];

    let mut reporter = ReportAggregator::new();
    for line in lines {
        let record = parse(LogFormat::Clf, line).unwrap();
        reporter.receive(&record).unwrap();
    }

    // 4 successes (200, 200, 302, 200) and 2 failures (404, 500).
    assert!((reporter.success_pct().unwrap() - 400.0 / 6.0).abs() < 1e-9);
    assert!((reporter.failed_pct().unwrap() - 200.0 / 6.0).abs() < 1e-9);

    // Both hosts have 3 requests; the tie breaks by name descending.
    let hosts: Vec<&str> = reporter
        .top_hosts(10)
        .iter()
        .map(|h| h.name.as_str())
        .collect();
    assert_eq!(hosts, vec!["beta", "alpha"]);

    let resources: Vec<(&str, u64)> = reporter
        .top_resources(2)
        .iter()
        .map(|r| (r.name.as_str(), r.num_requests()))
        .collect();
    assert_eq!(resources, vec![("/index.html", 4), ("/style.css", 1)]);

    let beta = reporter.host("beta").unwrap();
    let beta_top: Vec<&str> = beta
        .top_resources(1)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(beta_top, vec!["/index.html"]);
}

#[test]
fn malformed_lines_are_the_callers_problem_to_skip() {
    let lines = [
        "good - - [10/Nov/2000:13:55:36 -0700] \"GET /a HTTP/1.1\" 200 10",
        "this is not a log line",
        "good - - [10/Nov/2000:13:55:37 -0700] \"GET /a HTTP/1.1\" 200 10",
    ];

    let mut reporter = ReportAggregator::new();
    let mut skipped = 0;
    for line in lines {
        match parse(LogFormat::Clf, line) {
            Ok(record) => reporter.receive(&record).unwrap(),
            Err(Error::Parse { .. }) => skipped += 1,
            Err(other) => panic!("unexpected error kind: {other}"),
        }
    }

    assert_eq!(skipped, 1);
    assert_eq!(reporter.success_count, 2);
}

#[test]
fn a_parsable_line_with_an_unclassifiable_status_fails_only_at_receive() {
    let line = "host - - [10/Nov/2000:13:55:36 -0700] \"GET /a HTTP/1.1\" 888 10";
    let record = parse(LogFormat::Clf, line).unwrap();
    assert_eq!(record.status, "888");

    let mut reporter = ReportAggregator::new();
    assert_eq!(
        reporter.receive(&record).unwrap_err(),
        Error::Status("888".to_string())
    );
    assert_eq!(reporter.success_pct(), None);
    assert!(reporter.top_hosts(10).is_empty());
}
