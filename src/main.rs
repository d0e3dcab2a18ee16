use clap::Parser;
use moodjour::application::{
    build_report, build_timeline, init::init, ConfigService, DeleteOutcome, EntryService,
    ListOptions,
};
use moodjour::cli::{
    format_entry, format_entry_list, format_mood_list, format_report, format_timeline, Cli,
    Commands,
};
use moodjour::domain::{EntryPatch, SortKey, TimeRange};
use moodjour::error::{MoodjourError, Result};
use moodjour::infrastructure::{
    EntryStore, FileSystemRepository, FileSystemStorage, JournalRepository,
};
use std::io::{self, BufRead, Read, Write};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing("warn");

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_env("MOODJOUR_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn open_service() -> Result<(FileSystemRepository, EntryService<FileSystemStorage>)> {
    let repo = FileSystemRepository::discover()?;
    let store = EntryStore::open(repo.storage());
    Ok((repo, EntryService::new(store)))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized moodjour journal at {}", path.display());
            println!("Set your name with: moodjour name <NAME>");
            Ok(())
        }
        Commands::New {
            title,
            mood,
            content,
        } => {
            let (_, mut service) = open_service()?;
            let content = match content {
                Some(content) => content,
                None => read_stdin()?,
            };
            let entry = service.new_entry(&title, &mood, &content)?;
            println!("Created entry {}", entry.id);
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            mood,
            content,
        } => {
            let (_, mut service) = open_service()?;
            let patch = EntryPatch {
                title,
                mood,
                content,
            };
            let entry = service.edit_entry(id, &patch)?;
            println!("Updated entry {}", entry.id);
            Ok(())
        }
        Commands::Delete { id, yes } => {
            let (_, mut service) = open_service()?;
            let outcome = service.delete_entry(id, |entry| yes || confirm_delete(&entry.title))?;
            match outcome {
                DeleteOutcome::Deleted(entry) => println!("Deleted entry {}", entry.id),
                DeleteOutcome::Cancelled => println!("Cancelled"),
                DeleteOutcome::Missing => println!("No entry with id {}", id),
            }
            Ok(())
        }
        Commands::Show { id } => {
            let (_, service) = open_service()?;
            let entry = service.show_entry(id)?;
            print!("{}", format_entry(&entry));
            Ok(())
        }
        Commands::List {
            search,
            sort,
            limit,
        } => {
            let (repo, mut service) = open_service()?;
            let sort = match sort {
                Some(sort) => SortKey::from_str(&sort).map_err(MoodjourError::Config)?,
                None => repo.load_config()?.default_sort,
            };
            let entries = service.list_entries(&ListOptions {
                search,
                sort,
                limit,
            });
            print!("{}", format_entry_list(&entries));
            Ok(())
        }
        Commands::Recent => {
            let (repo, service) = open_service()?;
            let limit = repo.load_config()?.recent_limit;
            print!("{}", format_entry_list(&service.recent_entries(limit)));
            Ok(())
        }
        Commands::Stats { range } => {
            let range = TimeRange::from_str(&range).map_err(MoodjourError::Config)?;
            let (_, mut service) = open_service()?;
            if let Some(name) = service.user_name()? {
                println!("{}'s journal\n", name);
            }
            let report = build_report(&service.all_entries(), range, chrono::Utc::now());
            print!("{}", format_report(&report));
            Ok(())
        }
        Commands::Timeline { range } => {
            let range = TimeRange::from_str(&range).map_err(MoodjourError::Config)?;
            let (_, mut service) = open_service()?;
            let points = build_timeline(&service.all_entries(), range, chrono::Utc::now());
            print!("{}", format_timeline(&points));
            Ok(())
        }
        Commands::Moods => {
            print!("{}", format_mood_list());
            Ok(())
        }
        Commands::Name { name, clear } => {
            let (_, service) = open_service()?;
            if clear {
                service.clear_user_name()?;
                println!("Name cleared");
                return Ok(());
            }
            match name {
                Some(name) => {
                    service.set_user_name(&name)?;
                    println!("Hello, {}!", name.trim());
                }
                None => match service.user_name()? {
                    Some(name) => println!("{}", name),
                    None => println!("No name set. Use: moodjour name <NAME>"),
                },
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("default_sort = {}", config.default_sort);
                println!("recent_limit = {}", config.recent_limit);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: moodjour config [--list | <key> [<value>]]");
                println!("Valid keys: default_sort, recent_limit, created");
            }
            Ok(())
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

/// Ask on stdin; anything but y/yes declines.
fn confirm_delete(title: &str) -> bool {
    print!("Delete entry \"{}\"? [y/N] ", title);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
