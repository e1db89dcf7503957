use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cafe_counter::{
    config::AppConfig,
    console::{Console, StdConsole},
    db::create_pool,
    error::{AppError, AppResult},
    flows,
    services::auth_service,
    store::Store,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cafe_counter=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    // Failure to reach the store is the one fatal error; everything after
    // this point reports and returns to the menu.
    let pool = create_pool(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    let store = Store::new(pool);

    let mut console = StdConsole;
    console.write_line("*** Cafe Counter ***");

    loop {
        console.write_line("MAIN MENU");
        console.write_line("---------");
        console.write_line("1. Create account");
        console.write_line("2. Log in");
        console.write_line("9. Exit");
        match console.read_choice()? {
            1 => {
                if let Err(err) = create_account(&store, &mut console).await {
                    report(&mut console, &err);
                }
            }
            2 => match log_in(&store, &mut console).await {
                Ok(login) => session_menu(&store, &mut console, &login).await?,
                Err(AppError::Unauthenticated) => {
                    console.write_line("Login failed. Please try again.");
                }
                Err(err) => report(&mut console, &err),
            },
            9 => break,
            _ => console.write_line("Unrecognized choice!"),
        }
    }

    console.write_line("Bye!");
    Ok(())
}

async fn create_account(store: &Store, console: &mut StdConsole) -> AppResult<()> {
    let login = console.read_line("Enter login: ")?;
    let password = console.read_line("Enter password: ")?;
    let phone = console.read_line("Enter phone: ")?;
    auth_service::register(store, &login, &password, &phone).await?;
    console.write_line("Account successfully created!");
    Ok(())
}

async fn log_in(store: &Store, console: &mut StdConsole) -> AppResult<String> {
    let login = console.read_line("Enter login: ")?;
    let password = console.read_line("Enter password: ")?;
    let account = auth_service::login(store, &login, &password).await?;
    Ok(account.login)
}

async fn session_menu(
    store: &Store,
    console: &mut StdConsole,
    login: &str,
) -> anyhow::Result<()> {
    loop {
        console.write_line("SESSION MENU");
        console.write_line("------------");
        console.write_line("1. Browse menu");
        console.write_line("2. Search menu");
        console.write_line("3. Update profile");
        console.write_line("4. Place an order");
        console.write_line("5. Update an order");
        console.write_line("6. Order history");
        console.write_line("9. Log out");
        let result = match console.read_choice()? {
            1 => flows::browse_menu(store, console).await,
            2 => flows::search_menu(store, console).await,
            3 => flows::update_profile(store, console, login).await,
            4 => flows::place_order(store, console, login).await.map(|_| ()),
            5 => flows::update_order(store, console, login).await,
            6 => flows::order_history(store, console, login).await,
            9 => return Ok(()),
            _ => {
                console.write_line("Unrecognized choice!");
                Ok(())
            }
        };
        // A failed step aborts only itself; the menu comes back around.
        if let Err(err) = result {
            report(console, &err);
        }
    }
}

fn report(console: &mut StdConsole, err: &AppError) {
    tracing::warn!(error = %err, "workflow aborted");
    console.write_line(&format!("Error: {err}"));
}
