use actix_web::{App, HttpServer, middleware, web};

use partner_review::{config::Config, db, handlers, session};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = Config::from_env().map_err(|e| std::io::Error::other(e.to_string()))?;

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to connect to database: {e}")))?;

    if config.seed_demo {
        db::run_migrations(&pool)
            .await
            .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;
        if let Err(e) = db::seed_demo(&pool).await {
            log::error!("Demo seed failed: {e}");
        }
    }

    log::info!("Starting server at http://{}", config.bind_addr);

    let bind_addr = config.bind_addr.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(session::middleware(config.session_key.clone(), config.cookie_secure))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure::<sqlx::PgPool>)
            .default_service(web::to(handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
