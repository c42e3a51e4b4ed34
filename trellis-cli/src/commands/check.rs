use clap::{Args, Subcommand};
use eyre::Result;
use trellis_naming::{
    JsonType, RelationKind, Validity, check_property_name, validate_class_name,
    validate_relation_name, validate_required_name, validate_string_object, validate_url_slug,
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(subcommand)]
    command: CheckSubcommand,
}

#[derive(Subcommand)]
enum CheckSubcommand {
    /// Validate a class name
    Class(ClassArgs),

    /// Validate a model property name
    Property(PropertyArgs),

    /// Validate a generic artifact name
    Name(NameArgs),

    /// Validate a relation name
    Relation(RelationArgs),

    /// Validate a URL slug
    Slug(SlugArgs),

    /// Validate stringified JSON settings
    Settings(SettingsArgs),
}

#[derive(Args)]
struct ClassArgs {
    /// Class name to validate
    name: String,
}

#[derive(Args)]
struct PropertyArgs {
    /// Property name to validate
    name: String,
}

#[derive(Args)]
struct NameArgs {
    /// Name to validate
    name: String,
}

#[derive(Args)]
struct RelationArgs {
    /// Relation name to validate
    name: String,

    /// Relation kind: belongsTo, hasMany, hasOne, or referencesMany
    #[arg(short, long, default_value = "hasMany")]
    kind: RelationKind,

    /// Foreign key the relation resolves through
    #[arg(short, long)]
    foreign_key: Option<String>,
}

#[derive(Args)]
struct SlugArgs {
    /// URL slug to validate, with or without a leading slash
    slug: String,
}

#[derive(Args)]
struct SettingsArgs {
    /// Stringified JSON value (empty counts as "not given")
    #[arg(default_value = "")]
    value: String,

    /// Expected JSON shape: object or array
    #[arg(short, long, default_value = "object")]
    kind: JsonType,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let (label, verdict) = match &self.command {
            CheckSubcommand::Class(args) => ("class name", validate_class_name(&args.name)),
            CheckSubcommand::Property(args) => ("property name", check_property_name(&args.name)),
            CheckSubcommand::Name(args) => ("name", validate_required_name(&args.name)),
            CheckSubcommand::Relation(args) => (
                "relation name",
                validate_relation_name(&args.name, args.kind, args.foreign_key.as_deref()),
            ),
            CheckSubcommand::Slug(args) => ("url slug", validate_url_slug(&args.slug)),
            CheckSubcommand::Settings(args) => {
                ("settings", validate_string_object(args.kind)(&args.value))
            }
        };

        match verdict {
            Validity::Valid => println!("✓ valid {}", label),
            Validity::Invalid(reason) => {
                eprintln!("{}", reason);
                std::process::exit(1);
            }
        }

        Ok(())
    }
}
