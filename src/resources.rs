//! Built-in resource definitions
//!
//! Each resource names the API endpoint it is listed from, the page size
//! requested by default, the default output file and the CSV columns.

use crate::error::Result;
use crate::schema::{Column, Schema};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.firehydrant.io/v1";

const INCIDENT_FIELDS: &[&str] = &[
    "id",
    "name",
    "created_at",
    "started_at",
    "discarded_at",
    "summary",
    "customer_impact_summary",
    "description",
    "current_milestone",
    "number",
    "priority",
    "severity",
    "severity_color",
    "severity_impact",
    "severity_condition",
    "tag_list",
    "private_id",
    "organization_id",
    "active",
    "labels",
    "incident_url",
    "private_status_page_url",
];

const INCIDENT_TRAILING_FIELDS: &[&str] = &[
    "customers_impacted",
    "monetary_impact",
    "monetary_impact_cents",
    "last_update",
    "last_note",
    "report_id",
    "ai_incident_summary",
    "channel_name",
    "channel_reference",
    "channel_id",
    "channel_status",
    "retro_exports",
];

const USER_FIELDS: &[&str] = &["id", "name", "email", "slack_user_id"];

/// An exportable API resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Resource {
    /// Incidents (`/incidents`)
    Incidents,
    /// Users (`/users`)
    Users,
}

impl Resource {
    /// All built-in resources
    pub fn all() -> &'static [Resource] {
        &[Resource::Incidents, Resource::Users]
    }

    /// Resource name as used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Incidents => "incidents",
            Resource::Users => "users",
        }
    }

    /// Endpoint path relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Incidents => "/incidents",
            Resource::Users => "/users",
        }
    }

    /// Records requested per page unless overridden
    pub fn default_page_size(&self) -> u32 {
        match self {
            Resource::Incidents => 20,
            Resource::Users => 100,
        }
    }

    /// Output file written unless overridden
    pub fn default_output(&self) -> &'static str {
        match self {
            Resource::Incidents => "firehydrant_incidents.csv",
            Resource::Users => "firehydrant_users.csv",
        }
    }

    /// CSV columns for this resource
    pub fn schema(&self) -> Result<Schema> {
        let columns = match self {
            Resource::Incidents => incident_columns(),
            Resource::Users => user_columns(),
        };
        Schema::new(columns)
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn incident_columns() -> Vec<Column> {
    let mut columns: Vec<Column> = INCIDENT_FIELDS.iter().map(|f| Column::direct(*f)).collect();
    columns.push(Column::nested("organization_name", "organization", "name"));
    columns.extend(INCIDENT_TRAILING_FIELDS.iter().map(|f| Column::direct(*f)));
    columns.push(Column::nested("created_by_name", "created_by", "name"));
    columns.push(Column::nested("created_by_email", "created_by", "email"));
    columns
}

fn user_columns() -> Vec<Column> {
    let mut columns: Vec<Column> = USER_FIELDS.iter().map(|f| Column::direct(*f)).collect();
    columns.push(Column::renamed("slack_linked", "slack_linked?"));
    columns.push(Column::direct("created_at"));
    columns.push(Column::direct("updated_at"));
    columns
}
