use std::path::PathBuf;
use std::sync::Arc;

use chatdesk::chat::{Bubble, ChatError, ChatView, ConversationSession, Outcome, PendingRequest, Sender};
use chatdesk::directory::favorites::{self, FavoritesStore, JsonFavorites};
use chatdesk::directory::table::{self, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, SortDirection, SortKey};
use chatdesk::directory::{DirectoryError, Person, PersonFilter, PersonId, filter, happiness, source};
use chatdesk::llm::{Completion, CompletionClient, LlmConfig, LlmError, OpenAiClient};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error("stdin read failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "chatdesk", about = "Chat with a completion API and browse a people directory")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive chat on stdin. `/new` starts over, `/quit` exits.
    Chat,
    People(PeopleCommand),
}

#[derive(Args, Debug)]
struct PeopleCommand {
    #[arg(long, env = "CHATDESK_PEOPLE_FILE", default_value = "people.json")]
    file: PathBuf,

    #[arg(long, env = "CHATDESK_FAVORITES_FILE", default_value = "favorites.json")]
    favorites: PathBuf,

    #[command(subcommand)]
    command: PeopleSubcommand,
}

#[derive(Subcommand, Debug)]
enum PeopleSubcommand {
    List(ListArgs),
    /// Distinct categories and companies for the filter dropdowns.
    Facets,
    /// Toggle a person in or out of the favorites list.
    Favorite {
        id: String,
    },
    Favorites {
        #[arg(long, default_value = "")]
        search: String,
    },
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long, default_value = "")]
    search: String,

    #[arg(long, default_value = "")]
    category: String,

    #[arg(long, default_value = "")]
    company: String,

    #[arg(long, value_enum)]
    sort: Option<SortArg>,

    #[arg(long, default_value_t = false)]
    desc: bool,

    #[arg(long, default_value_t = 1)]
    page: usize,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = parse_page_size)]
    page_size: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Name,
    Category,
    Company,
    Happiness,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => Self::Name,
            SortArg::Category => Self::Category,
            SortArg::Company => Self::Company,
            SortArg::Happiness => Self::Happiness,
        }
    }
}

fn parse_page_size(raw: &str) -> Result<usize, String> {
    let size: usize = raw.parse().map_err(|_| format!("'{raw}' is not a number"))?;
    if PAGE_SIZE_OPTIONS.contains(&size) {
        Ok(size)
    } else {
        Err(format!("page size must be one of {PAGE_SIZE_OPTIONS:?}"))
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Chat => run_chat().await,
        Command::People(people) => run_people(people),
    }
}

// =============================================================================
// CHAT
// =============================================================================

type Reply = (PendingRequest, Result<Completion, LlmError>);

async fn run_chat() -> Result<(), CliError> {
    let config = LlmConfig::from_env()?;
    let client = OpenAiClient::from_config(config)?;
    tracing::info!(model = client.model(), "completion client initialized");
    let client: Arc<dyn CompletionClient> = Arc::new(client);

    let mut session = ConversationSession::new();
    print_view(&session.render());

    let (tx, mut rx) = mpsc::channel::<Reply>(8);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "/quit" => break,
                    "/new" => {
                        session.reset();
                        print_view(&session.render());
                    }
                    text => match session.begin(text) {
                        Ok(request) => {
                            print_last(&session.render());
                            spawn_request(Arc::clone(&client), request, tx.clone());
                        }
                        Err(ChatError::EmptyInput) => {}
                        Err(e) => println!("({e})"),
                    },
                }
            }
            Some((request, result)) = rx.recv() => {
                match session.complete(request, result) {
                    Outcome::Replied(_) | Outcome::Failed(_) => print_last(&session.render()),
                    Outcome::Stale => {}
                }
            }
        }
    }
    Ok(())
}

fn spawn_request(client: Arc<dyn CompletionClient>, request: PendingRequest, tx: mpsc::Sender<Reply>) {
    tokio::spawn(async move {
        let result = client.complete(request.messages()).await;
        let _ = tx.send((request, result)).await;
    });
}

fn print_view(view: &ChatView) {
    match view {
        ChatView::Welcome { title, prompt } => println!("{title}\n{prompt}"),
        ChatView::Conversation(bubbles) => bubbles.iter().for_each(print_bubble),
    }
}

fn print_last(view: &ChatView) {
    if let Some(bubble) = view.bubbles().last() {
        print_bubble(bubble);
    }
}

fn print_bubble(bubble: &Bubble) {
    let who = match bubble.sender {
        Sender::User => "you",
        Sender::Bot => "bot",
    };
    println!("{who}> {}", bubble.text);
}

// =============================================================================
// PEOPLE
// =============================================================================

fn run_people(cmd: PeopleCommand) -> Result<(), CliError> {
    match cmd.command {
        PeopleSubcommand::List(args) => {
            let people = source::load_people(&cmd.file)?;
            let store = JsonFavorites::open(&cmd.favorites)?;
            list_people(&people, store.favorites(), &args);
            Ok(())
        }
        PeopleSubcommand::Facets => {
            let people = source::load_people(&cmd.file)?;
            println!("categories: {}", filter::unique_categories(&people).join(", "));
            println!("companies: {}", filter::unique_companies(&people).join(", "));
            Ok(())
        }
        PeopleSubcommand::Favorite { id } => {
            let people = source::load_people(&cmd.file)?;
            let id = PersonId::new(id);
            let person = people
                .iter()
                .find(|p| p.id == id)
                .ok_or_else(|| DirectoryError::UnknownPerson(id.clone()))?;
            let mut store = JsonFavorites::open(&cmd.favorites)?;
            let added = favorites::toggle_favorite(&mut store, person)?;
            let verb = if added { "added to" } else { "removed from" };
            println!("{} {verb} favorites ({} total)", person.name, store.favorites().len());
            Ok(())
        }
        PeopleSubcommand::Favorites { search } => {
            let store = JsonFavorites::open(&cmd.favorites)?;
            let all = store.favorites();
            println!("My Favorites ({})", all.len());
            if all.is_empty() {
                println!("No favorites yet! Add some people to your favorites from the main table.");
                return Ok(());
            }
            let rows = PersonFilter::search(search).apply(all);
            for person in &rows {
                print_person(person, false);
            }
            println!("{}", filter::summary(rows.len(), all.len(), "favorites"));
            Ok(())
        }
    }
}

fn list_people(people: &[Person], favorites: &[Person], args: &ListArgs) {
    let person_filter = PersonFilter {
        search: args.search.clone(),
        category: args.category.clone(),
        company: args.company.clone(),
    };
    let mut rows = person_filter.apply(people);
    if let Some(sort) = args.sort {
        let direction = if args.desc { SortDirection::Descending } else { SortDirection::Ascending };
        table::sort_rows(&mut rows, sort.into(), direction);
    }

    let page = table::paginate(&rows, args.page, args.page_size);
    for person in &page.rows {
        print_person(person, favorites.iter().any(|f| f.id == person.id));
    }
    println!("{}", filter::summary(rows.len(), people.len(), "people"));
    println!("page {} of {}", page.number, page.page_count);
}

fn print_person(person: &Person, favorite: bool) {
    let marker = if favorite { "♥" } else { " " };
    let band = person.happiness();
    println!(
        "{marker} {:<6} {:<24} {:<18} {:<18} {:>5} {}",
        person.id,
        person.name,
        person.category.as_deref().unwrap_or("-"),
        person.company.as_deref().unwrap_or("-"),
        happiness::label(person.level_of_happiness),
        band.emoji(),
    );
}
