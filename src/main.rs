//! Promostore - 商品、促销码与购买记录的电商后端
//!
//! 启动顺序: 配置 -> 日志 -> 数据库 -> 仓储 -> HTTP 服务器

use std::sync::Arc;

use promostore::config::{load_config, print_config};
use promostore::infrastructure::http::{AppState, HttpServer, ServerConfig};
use promostore::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteProductRepository,
    SqlitePromoCodeRepository, SqlitePurchaseRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},promostore={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(env_filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Promostore - products, promo codes and purchases");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let product_repo = Arc::new(SqliteProductRepository::new(pool.clone()));
    let promo_code_repo = Arc::new(SqlitePromoCodeRepository::new(pool.clone()));
    let purchase_repo = Arc::new(SqlitePurchaseRepository::new(pool));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(product_repo, promo_code_repo, purchase_repo);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Received shutdown signal"),
                Err(e) => tracing::error!("Failed to listen for ctrl-c: {}", e),
            }
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
