use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use clap_mangen::Man;
use std::io;
use std::path::PathBuf;
use tracing::info;

use glyphtable::cli::browse::handle_browse;
use glyphtable::cli::favorites::{handle_favorites_command, FavoritesCommands};
use glyphtable::cli::table::{
    handle_categories, handle_copy, handle_show, handle_style, handle_table, CopyAs, OutputFormat,
};
use glyphtable::config::Config;
use glyphtable::core::category::CategoryId;

#[derive(Parser)]
#[command(name = "glyphtable")]
#[command(about = "A CLI utility to browse categorized Unicode symbols and keep favorites")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Preference store file (overrides config file)
    #[arg(long, global = true, env = "GLYPHTABLE_PREFS_FILE")]
    prefs_file: Option<PathBuf>,

    /// Enable verbose logging (overrides config file)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum)]
    completions: Option<Shell>,

    /// Generate man page
    #[arg(long)]
    man: bool,

    /// Show detailed information about the tool
    #[arg(long)]
    info: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser)]
enum Commands {
    /// List every symbol category with its size
    Categories,
    /// Print the symbols of a category
    Table {
        /// Category to print (uses config default if not specified)
        #[arg(short = 'C', long, value_enum)]
        category: Option<CategoryId>,
    },
    /// Show every representation of one symbol
    Show {
        /// A glyph, U+XXXX notation, or decimal code point
        symbol: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Copy a symbol representation to the clipboard
    Copy {
        /// A glyph, U+XXXX notation, or decimal code point
        symbol: String,

        /// Which representation to copy
        #[arg(long = "as", value_enum, default_value = "glyph")]
        representation: CopyAs,
    },
    /// Manage the persistent ★ Favorites list
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommands,
    },
    /// Show or set the preferred color style
    Style {
        /// Palette index to persist
        #[arg(long)]
        set: Option<usize>,
    },
    /// Browse symbols interactively
    Browse {
        /// Category to start in (uses config default if not specified)
        #[arg(short = 'C', long, value_enum)]
        category: Option<CategoryId>,
    },
}

fn create_subscriber(
    verbose: bool,
    time_format: String,
) -> Box<dyn tracing::Subscriber + Send + Sync> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Use predefined formats to avoid lifetime issues
    match time_format.as_str() {
        "[hour]:[minute]:[second]" => {
            let format_desc = time::format_description::parse("[hour]:[minute]:[second]").unwrap();
            Box::new(
                tracing_subscriber::fmt()
                    .with_max_level(level)
                    .with_timer(tracing_subscriber::fmt::time::LocalTime::new(format_desc))
                    .finish(),
            )
        }
        _ => {
            // Default format for all other cases (including custom formats)
            let format_desc =
                time::format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")
                    .unwrap();
            if time_format != "[year]-[month]-[day] [hour]:[minute]:[second]" {
                eprintln!(
                    "Custom time format '{time_format}' not supported. Using default format."
                );
            }
            Box::new(
                tracing_subscriber::fmt()
                    .with_max_level(level)
                    .with_timer(tracing_subscriber::fmt::time::LocalTime::new(format_desc))
                    .finish(),
            )
        }
    }
}

fn print_info() {
    println!("🔣 glyphtable v{}", env!("CARGO_PKG_VERSION"));
    println!("📝 {}", env!("CARGO_PKG_DESCRIPTION"));
    println!("🌐 Repository: {}", env!("CARGO_PKG_REPOSITORY"));
    println!("📄 License: {}", env!("CARGO_PKG_LICENSE"));
    println!();
    println!("📦 Symbol categories:");
    println!("  • ASCII-Printable, Currency, Greek Letters, Roman Numerals");
    println!("  • Punctuation, Math, Arrows, Zodiac, Planets");
    println!("  • Playing Card Suits, Musical, Other, plus All and ★ Favorites");
    println!();
    println!("🚀 Usage:");
    println!("   glyphtable categories            # List categories");
    println!("   glyphtable table -C math         # Print a category");
    println!("   glyphtable show '€'              # Inspect one symbol");
    println!("   glyphtable copy '€' --as html    # Copy a representation");
    println!("   glyphtable favorites add '★'     # Manage ★ Favorites");
    println!("   glyphtable browse                # Interactive browser");
    println!("   Use --help for detailed options");
    println!();
    println!("🔧 Shell Completions:");
    println!("   glyphtable --completions bash > /usr/local/etc/bash_completion.d/glyphtable");
    println!("   glyphtable --completions zsh > ~/.zfunc/_glyphtable");
    println!("   glyphtable --completions fish > ~/.config/fish/completions/glyphtable.fish");
    println!();
    println!("📖 Man Page:");
    println!("   glyphtable --man > /usr/local/share/man/man1/glyphtable.1");
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Handle --completions flag early
    if let Some(shell) = args.completions {
        let mut app = Args::command();
        generate(shell, &mut app, "glyphtable", &mut io::stdout());
        return Ok(());
    }

    // Handle --man flag early
    if args.man {
        let app = Args::command();
        let man = Man::new(app);
        man.render(&mut io::stdout())?;
        return Ok(());
    }

    // Handle --info flag early
    if args.info {
        print_info();
        return Ok(());
    }

    // Load configuration
    let config = if let Some(config_path) = &args.config {
        Config::load_from_file(config_path)?
    } else {
        Config::load()?
    };

    // Determine verbose setting (CLI flag overrides config file)
    let verbose = args.verbose || config.is_verbose_default();
    let time_format = config.get_time_format();

    // Initialize logging
    let subscriber = create_subscriber(verbose, time_format);
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set default subscriber");

    if let Some(config_path) = &args.config {
        info!("📋 Using custom config file: {}", config_path.display());
    }

    // Handle commands
    match args.command {
        Some(Commands::Categories) => handle_categories(&config, args.prefs_file),
        Some(Commands::Table { category }) => handle_table(category, &config, args.prefs_file),
        Some(Commands::Show { symbol, format }) => handle_show(&symbol, format),
        Some(Commands::Copy {
            symbol,
            representation,
        }) => handle_copy(&symbol, representation, &config),
        Some(Commands::Favorites { command }) => {
            handle_favorites_command(command, &config, args.prefs_file)
        }
        Some(Commands::Style { set }) => handle_style(set, &config, args.prefs_file),
        Some(Commands::Browse { category }) => handle_browse(category, &config, args.prefs_file),
        None => {
            // Default behavior: show the category overview
            handle_categories(&config, args.prefs_file)
        }
    }
}
