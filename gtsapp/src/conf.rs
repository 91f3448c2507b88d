use clap::{
    Args,
    Parser,
    Subcommand,
};
use gtsclient::Builder;
use gtscore::{
    kind::{
        EntityKind,
        SearchKind,
    },
    thesis::{
        Language,
        ThesisType,
    },
};
use crate::form::EntityForm;

#[derive(Debug, Parser)]
#[command(name = "gts", about = "Graduate Thesis System client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    #[clap(flatten)]
    pub platform_builder: Builder,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show one tab of the dashboard.
    List {
        #[clap(value_enum, ignore_case = true, default_value = "thesis")]
        kind: EntityKind,
    },
    #[command(arg_required_else_help = true)]
    Search {
        #[clap(long = "type", short = 't', value_enum, ignore_case = true, default_value = "All")]
        kind: SearchKind,
        keyword: String,
    },
    #[command(arg_required_else_help = true)]
    Show {
        #[clap(value_enum, ignore_case = true)]
        kind: EntityKind,
        id: i64,
    },
    #[command(arg_required_else_help = true)]
    Add {
        #[clap(value_enum, ignore_case = true)]
        kind: EntityKind,
        #[clap(flatten)]
        fields: Fields,
    },
    /// Edit a record; fields left out keep their current value.
    #[command(arg_required_else_help = true)]
    Edit {
        #[clap(value_enum, ignore_case = true)]
        kind: EntityKind,
        id: i64,
        #[clap(flatten)]
        fields: Fields,
    },
    #[command(arg_required_else_help = true)]
    Delete {
        #[clap(value_enum, ignore_case = true)]
        kind: EntityKind,
        id: i64,
        /// Skip the confirmation prompt.
        #[clap(long, short = 'y', action)]
        yes: bool,
    },
    /// Render the page at a path such as `/details/thesis/12`.
    #[command(arg_required_else_help = true)]
    Open {
        path: String,
    },
    Health,
}

/// Form fields as command line options.  Options that do not belong to
/// the kind being submitted are ignored.
#[derive(Debug, Default, Args)]
pub struct Fields {
    #[clap(long)]
    pub first_name: Option<String>,
    #[clap(long)]
    pub second_name: Option<String>,
    #[clap(long)]
    pub phone_number: Option<String>,
    #[clap(long)]
    pub university_name: Option<String>,
    #[clap(long)]
    pub location: Option<String>,
    #[clap(long)]
    pub institute_name: Option<String>,
    #[clap(long)]
    pub title: Option<String>,
    #[clap(long = "abstract")]
    pub abstract_text: Option<String>,
    #[clap(long)]
    pub author_id: Option<i64>,
    #[clap(long)]
    pub year: Option<String>,
    #[clap(long, value_enum, ignore_case = true)]
    pub thesis_type: Option<ThesisType>,
    #[clap(long)]
    pub university_id: Option<i64>,
    #[clap(long)]
    pub institute_id: Option<i64>,
    #[clap(long)]
    pub pages: Option<String>,
    #[clap(long, value_enum, ignore_case = true)]
    pub language: Option<Language>,
    /// YYYY-MM-DD
    #[clap(long)]
    pub submission_date: Option<String>,
    #[clap(long = "topic")]
    pub topics: Vec<String>,
    #[clap(long = "keyword")]
    pub keywords: Vec<String>,
}

fn set(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl Fields {
    /// Copy the given options onto `form`.
    pub fn apply(self, form: &mut EntityForm) {
        match form {
            EntityForm::Person(form) => {
                set(&mut form.first_name, self.first_name);
                set(&mut form.second_name, self.second_name);
                set(&mut form.phone_number, self.phone_number);
            }
            EntityForm::University(form) => {
                set(&mut form.university_name, self.university_name);
                set(&mut form.location, self.location);
            }
            EntityForm::Institute(form) => {
                set(&mut form.institute_name, self.institute_name);
                set(&mut form.university_id, self.university_id.map(|v| v.to_string()));
            }
            EntityForm::Thesis(form) => {
                set(&mut form.title, self.title);
                set(&mut form.abstract_text, self.abstract_text);
                set(&mut form.author_id, self.author_id.map(|v| v.to_string()));
                set(&mut form.thesis_year, self.year);
                set(&mut form.thesis_type, self.thesis_type.map(|v| v.to_string()));
                set(&mut form.university_id, self.university_id.map(|v| v.to_string()));
                set(&mut form.institute_id, self.institute_id.map(|v| v.to_string()));
                set(&mut form.page_count, self.pages);
                set(&mut form.language, self.language.map(|v| v.to_string()));
                set(&mut form.submission_date, self.submission_date);
                if !self.topics.is_empty() {
                    form.topics.set(self.topics);
                }
                if !self.keywords.is_empty() {
                    form.keywords.set(self.keywords);
                }
            }
        }
    }
}
