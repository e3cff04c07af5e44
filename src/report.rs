// File: src/report.rs

use std::collections::HashMap;

use serde::Serialize;

use crate::error::Error;
use crate::grammar;
use crate::parsers::LogRecord;

/// Which side of the ledger a status code lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 2xx or 3xx.
    Success,
    /// 1xx, 4xx or 5xx.
    Failure,
}

/// Classifies a status code string. A code matching neither the success
/// nor the failure pattern (e.g. "888", "0xx", non-digits) is an
/// [`Error::Status`] — it never silently defaults to one side.
pub fn classify(status: &str) -> Result<StatusClass, Error> {
    if grammar::success_status_regex().is_match(status) {
        Ok(StatusClass::Success)
    } else if grammar::fail_status_regex().is_match(status) {
        Ok(StatusClass::Failure)
    } else {
        Err(Error::Status(status.to_string()))
    }
}

/// A resource on the server that has been requested at least once,
/// generally identified by a path like `/sample/resource`.
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub name: String,
    pub success_count: u64,
    pub failure_count: u64,
}

impl Resource {
    fn new(name: String) -> Self {
        Resource {
            name,
            success_count: 0,
            failure_count: 0,
        }
    }

    fn add_request(&mut self, class: StatusClass) {
        match class {
            StatusClass::Success => self.success_count += 1,
            StatusClass::Failure => self.failure_count += 1,
        }
    }

    pub fn num_requests(&self) -> u64 {
        self.success_count + self.failure_count
    }
}

/// A client host that has made at least one request, with its own
/// per-resource breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct Host {
    pub name: String,
    pub success_count: u64,
    pub failure_count: u64,
    resources: HashMap<String, Resource>,
}

impl Host {
    fn new(name: String) -> Self {
        Host {
            name,
            success_count: 0,
            failure_count: 0,
            resources: HashMap::new(),
        }
    }

    fn add_resource(&mut self, resource_name: &str, class: StatusClass) {
        match class {
            StatusClass::Success => self.success_count += 1,
            StatusClass::Failure => self.failure_count += 1,
        }
        self.resources
            .entry(resource_name.to_string())
            .or_insert_with(|| Resource::new(resource_name.to_string()))
            .add_request(class);
    }

    pub fn num_requests(&self) -> u64 {
        self.success_count + self.failure_count
    }

    /// The top `n` resources requested by this host.
    pub fn top_resources(&self, n: usize) -> Vec<&Resource> {
        top_resources_of(&self.resources, n)
    }
}

/// Receives parsed log records one at a time and keeps running
/// aggregates: global success/failure totals plus per-host and
/// per-resource counters, queryable at any point.
#[derive(Debug, Default, Serialize)]
pub struct ReportAggregator {
    pub success_count: u64,
    pub failure_count: u64,
    hosts: HashMap<String, Host>,
    resources: HashMap<String, Resource>,
}

impl ReportAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one record into the running report.
    ///
    /// The status is classified before anything is touched, so an
    /// unclassifiable code leaves every counter exactly as it was.
    pub fn receive(&mut self, record: &LogRecord) -> Result<(), Error> {
        let class = classify(&record.status)?;

        match class {
            StatusClass::Success => self.success_count += 1,
            StatusClass::Failure => self.failure_count += 1,
        }

        let target = record.request.target();

        self.hosts
            .entry(record.host.clone())
            .or_insert_with(|| Host::new(record.host.clone()))
            .add_resource(&target, class);

        self.resources
            .entry(target.clone())
            .or_insert_with(|| Resource::new(target))
            .add_request(class);

        Ok(())
    }

    /// The top `n` hosts by request count, ties broken by host name
    /// descending. Returns fewer entries when fewer hosts exist.
    pub fn top_hosts(&self, n: usize) -> Vec<&Host> {
        let mut hosts: Vec<&Host> = self.hosts.values().collect();
        hosts.sort_by(|a, b| {
            (b.num_requests(), b.name.as_str()).cmp(&(a.num_requests(), a.name.as_str()))
        });
        hosts.truncate(n);
        hosts
    }

    /// The top `n` requested resources across all hosts, same ordering
    /// rule as [`ReportAggregator::top_hosts`].
    pub fn top_resources(&self, n: usize) -> Vec<&Resource> {
        top_resources_of(&self.resources, n)
    }

    /// Percentage of successful requests, or `None` before any record
    /// has been received.
    pub fn success_pct(&self) -> Option<f64> {
        let total = self.success_count + self.failure_count;
        if total == 0 {
            return None;
        }
        Some(self.success_count as f64 / total as f64 * 100.0)
    }

    /// Percentage of unsuccessful requests, or `None` before any record
    /// has been received.
    pub fn failed_pct(&self) -> Option<f64> {
        self.success_pct().map(|pct| 100.0 - pct)
    }

    /// Borrowed view of a single host's running counters.
    pub fn host(&self, name: &str) -> Option<&Host> {
        self.hosts.get(name)
    }
}

fn top_resources_of(resources: &HashMap<String, Resource>, n: usize) -> Vec<&Resource> {
    let mut all: Vec<&Resource> = resources.values().collect();
    all.sort_by(|a, b| {
        (b.num_requests(), b.name.as_str()).cmp(&(a.num_requests(), a.name.as_str()))
    });
    all.truncate(n);
    all
}
