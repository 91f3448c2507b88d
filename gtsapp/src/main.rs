use clap::Parser;
use gtsapp::{
    app::{
        chrome,
        route::Route,
    },
    conf::{
        Cli,
        Commands,
        Fields,
    },
    interrupt,
    state::SubmitState,
    view::{
        self,
        create::CreateView,
        dashboard::Dashboard,
        edit::EditView,
        search::SearchView,
    },
};
use gtsclient::{
    AbortHandle,
    HttpPlatform,
};
use gtscore::{
    kind::{
        EntityKind,
        SearchKind,
    },
    platform::PlatformUrl,
    status::StatusBackend,
};
use std::io::{
    BufRead,
    Write,
    stdin,
    stdout,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("gtsapp")
        .module("gtsclient")
        .module("gtscore")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let platform = args.platform_builder.build()?;
    log::info!("using the thesis API at {}", platform.url());

    match args.command {
        Commands::List { kind } => {
            parse_list(&platform, kind).await?;
        },
        Commands::Search { kind, keyword } => {
            parse_search(&platform, kind, keyword).await?;
        },
        Commands::Show { kind, id } => {
            println!("{}", view::open(&platform, Route::details(kind, id)).await);
        },
        Commands::Add { kind, fields } => {
            parse_add(&platform, kind, fields).await?;
        },
        Commands::Edit { kind, id, fields } => {
            parse_edit(&platform, kind, id, fields).await?;
        },
        Commands::Delete { kind, id, yes } => {
            parse_delete(&platform, kind, id, yes).await?;
        },
        Commands::Open { path } => {
            println!("{}", view::open(&platform, Route::resolve(&path)).await);
        },
        Commands::Health => {
            let health = platform.health().await?;
            println!("ok: {}, db: {}, test: {}", health.ok, health.db, health.test);
        },
    }

    Ok(())
}

/// Abort the requests of a view on Ctrl-C; a second Ctrl-C exits, which
/// also covers the delete prompt.
fn abort_on_interrupt(handle: AbortHandle) {
    tokio::spawn(async move {
        if interrupt::abort_on(handle, tokio::signal::ctrl_c).await {
            std::process::exit(130);
        }
    });
}

async fn show_dashboard(
    platform: &HttpPlatform,
    kind: EntityKind,
    notice: Option<String>,
) {
    let mut dashboard = Dashboard::new(platform);
    abort_on_interrupt(dashboard.abort_handle());
    dashboard.mount().await;
    dashboard.select_tab(kind);
    if let Some(notice) = notice {
        dashboard.set_notice(notice);
    }
    println!("{}", chrome(&Route::Dashboard, &dashboard.render()));
}

async fn parse_list(
    platform: &HttpPlatform,
    kind: EntityKind,
) -> anyhow::Result<()> {
    show_dashboard(platform, kind, None).await;
    Ok(())
}

async fn parse_search(
    platform: &HttpPlatform,
    kind: SearchKind,
    keyword: String,
) -> anyhow::Result<()> {
    let mut search = SearchView::new(platform);
    abort_on_interrupt(search.abort_handle());
    search.mount().await;
    search.set_kind(kind);
    search.set_keyword(keyword);
    search.search().await;
    println!("{}", chrome(&Route::Search, &search.render()));
    Ok(())
}

/// Print the outcome of a form submission; a successful one continues
/// on the dashboard.
async fn finish(
    platform: &HttpPlatform,
    kind: EntityKind,
    state: SubmitState,
    page: String,
) -> anyhow::Result<()> {
    match state {
        SubmitState::Navigated(navigation) => {
            log::debug!("navigating to {}", navigation.route);
            show_dashboard(platform, kind, Some(navigation.notice)).await;
            Ok(())
        }
        SubmitState::Failed(message) => {
            println!("{page}");
            anyhow::bail!(message)
        }
        _ => anyhow::bail!("submission did not complete"),
    }
}

async fn parse_add(
    platform: &HttpPlatform,
    kind: EntityKind,
    fields: Fields,
) -> anyhow::Result<()> {
    let mut create = CreateView::new(platform);
    abort_on_interrupt(create.abort_handle());
    create.mount().await;
    create.select_kind(kind);
    fields.apply(create.form_mut());
    let state = create.submit().await.clone();
    let page = chrome(&Route::Add, &create.render());
    finish(platform, kind, state, page).await
}

async fn parse_edit(
    platform: &HttpPlatform,
    kind: EntityKind,
    id: i64,
    fields: Fields,
) -> anyhow::Result<()> {
    let route = Route::edit(kind, id);
    let mut edit = EditView::new(platform, kind, id);
    abort_on_interrupt(edit.abort_handle());
    edit.mount().await;
    if edit.state().ready().is_none() {
        println!("{}", chrome(&route, &edit.render()));
        anyhow::bail!("{kind} {id} could not be loaded");
    }
    if kind == EntityKind::Thesis && fields.author_id.is_some() {
        log::warn!("the author of a thesis cannot be changed; ignoring --author-id");
    }
    if let Some(form) = edit.form_mut() {
        fields.apply(form);
    }
    let state = edit.submit().await.clone();
    let page = chrome(&route, &edit.render());
    finish(platform, kind, state, page).await
}

async fn parse_delete(
    platform: &HttpPlatform,
    kind: EntityKind,
    id: i64,
    yes: bool,
) -> anyhow::Result<()> {
    let mut dashboard = Dashboard::new(platform);
    abort_on_interrupt(dashboard.abort_handle());
    dashboard.mount().await;
    dashboard.select_tab(kind);
    let message = dashboard.request_delete(kind, id)
        .map(|dialog| dialog.to_string());
    let Some(message) = message else {
        println!("{}", chrome(&Route::Dashboard, &dashboard.render()));
        anyhow::bail!("{kind} {id} is not listed");
    };
    let confirmed = yes || {
        print!("{message} [y/N] ");
        stdout().flush()?;
        let mut answer = String::new();
        stdin().lock().read_line(&mut answer)?;
        matches!(answer.trim(), "y" | "Y" | "yes")
    };
    if confirmed {
        dashboard.confirm_delete().await;
    } else {
        dashboard.cancel_delete();
    }
    println!("{}", chrome(&Route::Dashboard, &dashboard.render()));
    Ok(())
}
