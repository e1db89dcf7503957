use cafe_counter::{
    console::ScriptedConsole,
    db::create_pool,
    error::AppError,
    flows,
    models::Role,
    services::{auth_service, history_service, menu_service, order_service, profile_service},
    store::Store,
};
use profile_service::ProfileField;

// Full pass over the counter workflows against a live Postgres: register and
// log in, place and mutate an order, settle it, then check history and
// profile editing. Kept as one test because it truncates shared tables.
#[tokio::test]
async fn register_order_settle_and_history_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url =
        match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
            Ok(url) => url,
            Err(_) => {
                eprintln!(
                    "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
                );
                return Ok(());
            }
        };

    let store = setup_store(&database_url).await?;

    // Registration and login.
    let account = auth_service::register(&store, "alice", "pw1", "555-0001").await?;
    assert_eq!(account.role, "Customer");
    assert_eq!(account.fav_items, "");

    let err = auth_service::register(&store, "alice", "other", "555-9999")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateLogin));

    let err = auth_service::login(&store, "alice", "wrong").await.unwrap_err();
    assert!(matches!(err, AppError::Unauthenticated));
    let account = auth_service::login(&store, "alice", "pw1").await?;
    assert_eq!(account.login, "alice");

    let err = auth_service::resolve_role(&store, "ghost").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    // Catalog lookups: by category, by exact name, and a miss.
    let drinks = menu_service::find_by_name_or_category(&store, "Drinks").await?;
    assert!(drinks.iter().any(|item| item.item_name == "Coffee"));
    assert!(drinks.iter().any(|item| item.item_name == "Tea"));
    let bagel = menu_service::find_by_name_or_category(&store, "Bagel").await?;
    assert_eq!(bagel.len(), 1);
    assert!(
        menu_service::find_by_name_or_category(&store, "nothing-here")
            .await?
            .is_empty()
    );
    let err = menu_service::price_of(&store, "Espresso Machine").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    // Place an order: Coffee + Bagel, with one invalid name along the way.
    let mut console = ScriptedConsole::new(["Coffee", "Espresso Machine", "Bagel", "q"]);
    let order = flows::place_order(&store, &mut console, "alice").await?;
    assert!(console.printed("No menu item by that name exists"));
    assert!(console.printed("Order placed with orderID"));
    assert!((order.total - 4.25).abs() < 1e-6);
    assert!(!order.paid);
    assert_eq!(order_service::lines_for(&store, order.order_id).await?.len(), 2);

    // The assigned id matches the store's order sequence.
    let seq = store.current_sequence_value("orders_order_id_seq").await?;
    assert_eq!(seq, order.order_id);

    // Add then remove returns the total to its pre-add value.
    let total = order_service::add_line(&store, order.order_id, "Tea").await?;
    assert!((total - 5.50).abs() < 1e-6);
    let total = order_service::remove_line(&store, order.order_id, "Tea").await?;
    assert!((total - 4.25).abs() < 1e-6);
    assert_eq!(order_service::lines_for(&store, order.order_id).await?.len(), 2);

    // Customer removes the Bagel through the interactive flow.
    let order_id_text = order.order_id.to_string();
    let mut console = ScriptedConsole::new([order_id_text.as_str(), "0", "Bagel"]);
    flows::update_order(&store, &mut console, "alice").await?;
    assert!(console.printed("New order total: $2.50"));
    let current = order_service::order_by_id(&store, order.order_id).await?;
    assert!((current.total - 2.50).abs() < 1e-6);

    let err = order_service::remove_line(&store, order.order_id, "Bagel")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::LineNotFound));

    // An employee settles the order through the staff branch.
    auth_service::register(&store, "bob", "pw", "555-0002").await?;
    profile_service::update_field(&store, "bob", ProfileField::Role, "Employee").await?;
    assert_eq!(auth_service::resolve_role(&store, "bob").await?, Role::Employee);

    let mut console = ScriptedConsole::new(["alice", order_id_text.as_str()]);
    flows::update_order(&store, &mut console, "bob").await?;
    assert!(console.printed("Order marked as paid."));
    let settled = order_service::order_by_id(&store, order.order_id).await?;
    assert!(settled.paid);
    for line in order_service::lines_for(&store, order.order_id).await? {
        assert!(line.last_updated >= settled.received_at);
    }

    // Paid orders are immutable: add, remove, and re-settle all reject.
    let err = order_service::add_line(&store, order.order_id, "Coffee").await.unwrap_err();
    assert!(matches!(err, AppError::OrderSettled));
    let err = order_service::remove_line(&store, order.order_id, "Coffee").await.unwrap_err();
    assert!(matches!(err, AppError::OrderSettled));
    let err = order_service::settle(&store, order.order_id).await.unwrap_err();
    assert!(matches!(err, AppError::OrderSettled));
    let untouched = order_service::order_by_id(&store, order.order_id).await?;
    assert!((untouched.total - 2.50).abs() < 1e-6);
    assert_eq!(order_service::lines_for(&store, order.order_id).await?.len(), 1);

    // The customer branch shows the paid order read-only and rejects.
    let mut console = ScriptedConsole::new([order_id_text.as_str()]);
    let err = flows::update_order(&store, &mut console, "alice").await.unwrap_err();
    assert!(matches!(err, AppError::OrderSettled));
    assert!(console.printed("changes can no longer be made"));

    // History: staff see recent unsettled orders, customers their own five.
    let draft = order_service::create_draft(&store, "alice").await?;
    let open_order = order_service::finalize(&store, draft, 3.00).await?;

    let unsettled = history_service::unsettled_recent(&store).await?;
    assert!(unsettled.iter().any(|o| o.order_id == open_order.order_id));
    assert!(unsettled.iter().all(|o| !o.paid));
    assert!(!unsettled.iter().any(|o| o.order_id == order.order_id));

    for _ in 0..4 {
        let draft = order_service::create_draft(&store, "alice").await?;
        order_service::finalize(&store, draft, 0.0).await?;
    }
    let recent = history_service::recent_for(&store, "alice").await?;
    assert_eq!(recent.len(), 5);
    for pair in recent.windows(2) {
        assert!(pair[0].received_at >= pair[1].received_at);
    }

    // A customer with no orders gets the empty-history message.
    auth_service::register(&store, "carol", "pw", "555-0003").await?;
    let mut console = ScriptedConsole::new(Vec::<String>::new());
    flows::order_history(&store, &mut console, "carol").await?;
    assert!(console.printed("No orders found."));

    // Manager profile editing: edit the target, then the manager's own
    // account, in that order.
    auth_service::register(&store, "mel", "pw", "555-0004").await?;
    profile_service::update_field(&store, "mel", ProfileField::Role, "Manager").await?;
    assert_eq!(auth_service::resolve_role(&store, "mel").await?, Role::Manager);

    let mut console = ScriptedConsole::new(["alice", "3", "555-1234", "3", "555-7777"]);
    flows::update_profile(&store, &mut console, "mel").await?;
    assert_eq!(profile_service::find_account(&store, "alice").await?.phone, "555-1234");
    assert_eq!(profile_service::find_account(&store, "mel").await?.phone, "555-7777");

    // A missing target aborts the whole manager flow, own edit included.
    let mut console = ScriptedConsole::new(["ghost"]);
    let err = flows::update_profile(&store, &mut console, "mel").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    // A customer edits only their own account.
    let mut console = ScriptedConsole::new(["2", "pw2"]);
    flows::update_profile(&store, &mut console, "alice").await?;
    auth_service::login(&store, "alice", "pw2").await?;
    let err = auth_service::login(&store, "alice", "pw1").await.unwrap_err();
    assert!(matches!(err, AppError::Unauthenticated));

    Ok(())
}

async fn setup_store(database_url: &str) -> anyhow::Result<Store> {
    let pool = create_pool(database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Clean tables between runs.
    sqlx::query("TRUNCATE TABLE order_lines, orders, menu, users RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await?;

    for (name, category, price) in [
        ("Coffee", "Drinks", 2.50),
        ("Tea", "Drinks", 1.25),
        ("Bagel", "Sweets", 1.75),
        ("Tomato Soup", "Soup", 3.00),
    ] {
        sqlx::query("INSERT INTO menu (item_name, category, price) VALUES ($1, $2, $3)")
            .bind(name)
            .bind(category)
            .bind(price)
            .execute(&pool)
            .await?;
    }

    Ok(Store::new(pool))
}
