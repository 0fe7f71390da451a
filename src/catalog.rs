//! The process-wide registry of bundled catalog files.
//!
//! This is deliberately a plain `&'static` table rather than anything
//! dynamic: the set of catalog files shipped with the crate is fixed at
//! build time (see `build.rs`), only their *contents* are lazily parsed.

/// Coarse grouping used by [`crate::PatternRepository::get_pattern_types_by_category`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Base,
    Web,
    Cloud,
    Mail,
    Security,
    Network,
    Database,
    Application,
    Os,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Base => "base",
            Category::Web => "web",
            Category::Cloud => "cloud",
            Category::Mail => "mail",
            Category::Security => "security",
            Category::Network => "network",
            Category::Database => "database",
            Category::Application => "application",
            Category::Os => "os",
        }
    }
}

/// One entry in the bundled catalog: a logical file name, a human label,
/// and the category it is grouped under.
#[derive(Clone, Copy, Debug)]
pub struct CatalogFile {
    pub file_name: &'static str,
    pub description: &'static str,
    pub category: Category,
}

use Category::*;

/// The full catalog, non-exhaustive per spec but covering every category
/// and every logical file name called out by the specification.
///
/// Note the `"junos "` entry: one bundled file intentionally carries a
/// trailing space in its logical name and must be addressable verbatim.
pub static CATALOG: &[CatalogFile] = &[
    CatalogFile {
        file_name: "patterns",
        description: "Generic building blocks: numbers, dates, networking, paths",
        category: Base,
    },
    CatalogFile {
        file_name: "aws",
        description: "Amazon Web Services access and VPC flow logs",
        category: Cloud,
    },
    CatalogFile {
        file_name: "bacula",
        description: "Bacula backup daemon log lines",
        category: Application,
    },
    CatalogFile {
        file_name: "bind",
        description: "ISC BIND name server logs",
        category: Network,
    },
    CatalogFile {
        file_name: "bro",
        description: "Bro network security monitor logs",
        category: Security,
    },
    CatalogFile {
        file_name: "zeek",
        description: "Zeek network security monitor logs",
        category: Security,
    },
    CatalogFile {
        file_name: "exim",
        description: "Exim mail transfer agent logs",
        category: Mail,
    },
    CatalogFile {
        file_name: "firewalls",
        description: "Common firewall and packet-filter log formats",
        category: Security,
    },
    CatalogFile {
        file_name: "java",
        description: "Java stack traces and log4j-style log lines",
        category: Application,
    },
    CatalogFile {
        file_name: "junos ",
        description: "Juniper JUNOS log lines",
        category: Network,
    },
    CatalogFile {
        file_name: "linux-syslog",
        description: "RFC 3164-style syslog lines",
        category: Os,
    },
    CatalogFile {
        file_name: "mcollective",
        description: "MCollective orchestration agent logs",
        category: Application,
    },
    CatalogFile {
        file_name: "mongodb",
        description: "MongoDB server logs",
        category: Database,
    },
    CatalogFile {
        file_name: "nagios",
        description: "Nagios monitoring core logs",
        category: Application,
    },
    CatalogFile {
        file_name: "postfix",
        description: "Postfix mail transfer agent logs",
        category: Mail,
    },
    CatalogFile {
        file_name: "postgresql",
        description: "PostgreSQL server logs",
        category: Database,
    },
    CatalogFile {
        file_name: "rails",
        description: "Ruby on Rails application logs",
        category: Web,
    },
    CatalogFile {
        file_name: "redis",
        description: "Redis server logs",
        category: Database,
    },
    CatalogFile {
        file_name: "ruby",
        description: "Generic Ruby exception and log formats",
        category: Application,
    },
    CatalogFile {
        file_name: "squid",
        description: "Squid caching proxy access logs",
        category: Web,
    },
    CatalogFile {
        file_name: "maven",
        description: "Apache Maven build log lines",
        category: Application,
    },
];

/// Returns the catalog entry for `file_name`, if any.
pub fn lookup(file_name: &str) -> Option<&'static CatalogFile> {
    CATALOG.iter().find(|c| c.file_name == file_name)
}
