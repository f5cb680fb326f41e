use clap::Parser;
use directories::ProjectDirs;
use hubnotes::api::{ConfigAction, NoteEdit, NotesApi};
use hubnotes::config::NotesConfig;
use hubnotes::error::{NotesError, Result};
use hubnotes::logging::init_logging;
use hubnotes::model::NewNote;
use hubnotes::storage::fs::FsStorage;
use hubnotes::store::NoteStore;
use hubnotes::tags::TagSet;
use std::path::PathBuf;

mod args;
mod cli;
use args::{Cli, Commands};
use cli::{print_config, print_full_note, print_messages, print_notes};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: NotesApi<FsStorage>,
    config: NotesConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::View { reference }) => handle_view(&ctx, &reference),
        Some(Commands::New {
            title,
            content,
            tags,
        }) => handle_new(&mut ctx, title, content, tags),
        Some(Commands::Edit {
            reference,
            title,
            content,
            tags,
            untags,
        }) => {
            let edit = NoteEdit {
                title,
                content,
                add_tags: tags,
                remove_tags: untags,
            };
            handle_edit(&mut ctx, &reference, edit)
        }
        Some(Commands::Delete { reference }) => handle_delete(&mut ctx, &reference),
        Some(Commands::Export { out }) => handle_export(&ctx, out),
        Some(Commands::Import { file }) => handle_import(&mut ctx, file),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "utilityhub", "hubnotes")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| NotesError::Api("Could not determine data directory".into()))?,
    };
    log::debug!("using data dir {}", data_dir.display());

    let config = NotesConfig::load(&data_dir)?;
    let store = NoteStore::new(FsStorage::new(&data_dir), config.storage_key.clone());
    let mut api = NotesApi::new(store, data_dir);

    let loaded = api.load();
    print_messages(&loaded.messages);

    Ok(AppContext { api, config })
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = ctx.api.list_notes(search.as_deref().unwrap_or(""))?;
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, reference: &str) -> Result<()> {
    let result = ctx.api.view_note(reference)?;
    for dn in &result.listed_notes {
        print_full_note(dn);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_new(
    ctx: &mut AppContext,
    title: Option<String>,
    content: String,
    tags: Vec<String>,
) -> Result<()> {
    let fields = NewNote {
        title,
        content,
        tags: TagSet::from_loose(tags),
    };
    let result = ctx.api.create_note(fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, reference: &str, edit: NoteEdit) -> Result<()> {
    let result = ctx.api.edit_note(reference, edit)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, reference: &str) -> Result<()> {
    let result = ctx.api.delete_note(reference)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, out: Option<PathBuf>) -> Result<()> {
    let dir = match out.or_else(|| ctx.config.export_dir.clone()) {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(NotesError::Io)?,
    };
    let result = ctx.api.export_notes(&dir)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.import_notes(&file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let only = match &action {
        ConfigAction::ShowAll => None,
        ConfigAction::ShowKey(key) | ConfigAction::Set(key, _) => Some(key.clone()),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config, only.as_deref());
    }
    print_messages(&result.messages);
    Ok(())
}
