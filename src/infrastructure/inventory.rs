use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{Hostname, HostnameError};

/// Environment variable naming the inventory file, set by whatever
/// provisioned the hosts under test.
pub const INVENTORY_ENV: &str = "DNSCHECK_INVENTORY";

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error(
        "No inventory file configured. Set {INVENTORY_ENV} or pass --inventory PATH"
    )]
    EnvUnset,

    #[error("Failed to read inventory file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid host in inventory {path}: {source}")]
    InvalidHost {
        path: PathBuf,
        source: HostnameError,
    },

    #[error("No hosts found in inventory {path} for group '{group}'")]
    NoHosts { path: PathBuf, group: String },
}

/// Hosts parsed from an Ansible-style INI inventory file.
///
/// Supported subset: `#`/`;` comments, `[group]` section headers,
/// one host per line with optional trailing `key=value` variables.
/// `[group:vars]` and `[group:children]` sections are skipped.
#[derive(Debug)]
pub struct Inventory {
    path: PathBuf,
    entries: Vec<(String, Hostname)>,
}

impl Inventory {
    /// Load the inventory named by the `DNSCHECK_INVENTORY` environment
    /// variable.
    pub fn from_env() -> Result<Self, InventoryError> {
        let path = env::var_os(INVENTORY_ENV).ok_or(InventoryError::EnvUnset)?;
        Self::load(PathBuf::from(path))
    }

    pub fn load(path: impl Into<PathBuf>) -> Result<Self, InventoryError> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|source| InventoryError::ReadError {
            path: path.clone(),
            source,
        })?;

        let entries = parse_entries(&content, &path)?;
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hosts belonging to `group`, in file order, each host once.
    /// The pseudo-group `all` matches every host.
    pub fn hosts(&self, group: &str) -> Result<Vec<Hostname>, InventoryError> {
        let mut hosts: Vec<Hostname> = Vec::new();
        for (entry_group, host) in &self.entries {
            if (group == "all" || entry_group == group) && !hosts.contains(host) {
                hosts.push(host.clone());
            }
        }

        if hosts.is_empty() {
            return Err(InventoryError::NoHosts {
                path: self.path.clone(),
                group: group.to_string(),
            });
        }
        Ok(hosts)
    }
}

fn parse_entries(
    content: &str,
    path: &Path,
) -> Result<Vec<(String, Hostname)>, InventoryError> {
    let mut entries = Vec::new();
    let mut group = String::from("ungrouped");
    let mut skipping_section = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            // :vars and :children sections hold no host entries
            skipping_section = header.contains(':');
            if !skipping_section {
                group = header.to_string();
            }
            continue;
        }

        if skipping_section {
            continue;
        }

        // First token is the host; the rest are per-host variables
        let token = line
            .split_whitespace()
            .next()
            .expect("non-empty line has a first token");
        let host = Hostname::new(token).map_err(|source| InventoryError::InvalidHost {
            path: path.to_path_buf(),
            source,
        })?;
        entries.push((group.clone(), host));
    }

    Ok(entries)
}
