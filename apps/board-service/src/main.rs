//! # Board Service サーバー
//!
//! 付箋ボードのメッセージとステッカーを管理する API サーバー。
//!
//! ## 役割
//!
//! - **メッセージ管理**: トピックに紐づくメッセージの CRUD
//! - **ステッカー管理**: メッセージに貼れるステッカーの CRUD
//! - **入力検証**: 違反を 1 回のレスポンスにまとめて返す
//!
//! ## レイヤー構成
//!
//! ```text
//! ┌──────────────┐
//! │   handler    │  HTTP リクエスト/レスポンス変換
//! └──────┬───────┘
//!        ↓
//! ┌──────────────┐
//! │   usecase    │  検証 → 永続化の順序を保証
//! └──────┬───────┘
//!        ↓
//! ┌──────────────┐
//! │  repository  │  PostgreSQL への永続化
//! └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `SERVER_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `SERVER_PORT` | **Yes** | ポート番号 |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p fusen-board-service
//!
//! # 本番環境
//! SERVER_PORT=13000 DATABASE_URL=postgres://... cargo run -p fusen-board-service --release
//! ```

mod config;
mod error;
mod handler;
mod usecase;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use config::BoardConfig;
use fusen_infra::{
   db,
   repository::{
      MessageRepository,
      PostgresMessageRepository,
      PostgresStickerRepository,
      StickerRepository,
   },
};
use fusen_shared::observability::TracingConfig;
use handler::{
   MessageState,
   ReadinessState,
   StickerState,
   create_message,
   create_sticker,
   delete_message,
   delete_sticker,
   get_message,
   get_sticker,
   health_check,
   list_messages,
   list_stickers,
   readiness_check,
   update_message,
   update_sticker,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use usecase::{MessageUseCaseImpl, StickerUseCaseImpl};

/// Board Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   let tracing_config = TracingConfig::from_env("board-service");
   fusen_shared::observability::init_tracing(tracing_config);
   let _tracing_guard = tracing::info_span!("app", service = "board-service").entered();

   // 設定読み込み
   let config = BoardConfig::from_env().expect("設定の読み込みに失敗しました");

   tracing::info!(
      "Board Service サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // データベース接続プールを作成
   let pool = db::create_pool(&config.database_url)
      .await
      .expect("データベース接続に失敗しました");
   tracing::info!("データベースに接続しました");

   // マイグレーション実行
   db::run_migrations(&pool)
      .await
      .expect("マイグレーションの実行に失敗しました");
   tracing::info!("マイグレーションを適用しました");

   // Readiness Check 用 State（pool が move される前に clone）
   let readiness_state = Arc::new(ReadinessState { pool: pool.clone() });

   // 依存コンポーネントを初期化
   let message_repository: Arc<dyn MessageRepository> =
      Arc::new(PostgresMessageRepository::new(pool.clone()));
   let message_state = Arc::new(MessageState {
      usecase: MessageUseCaseImpl::new(message_repository),
   });

   let sticker_repository: Arc<dyn StickerRepository> =
      Arc::new(PostgresStickerRepository::new(pool));
   let sticker_state = Arc::new(StickerState {
      usecase: StickerUseCaseImpl::new(sticker_repository),
   });

   // ルーター構築
   let app = Router::new()
      .route("/health", get(health_check))
      .merge(
         Router::new()
            .route("/health/ready", get(readiness_check))
            .with_state(readiness_state),
      )
      .merge(
         Router::new()
            .route(
               "/api/v1.0/messages",
               get(list_messages).post(create_message).put(update_message),
            )
            .route(
               "/api/v1.0/messages/{id}",
               get(get_message).delete(delete_message),
            )
            .with_state(message_state),
      )
      .merge(
         Router::new()
            .route(
               "/api/v1.0/stickers",
               get(list_stickers).post(create_sticker).put(update_sticker),
            )
            .route(
               "/api/v1.0/stickers/{id}",
               get(get_sticker).delete(delete_sticker),
            )
            .with_state(sticker_state),
      )
      .layer(TraceLayer::new_for_http());

   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Board Service サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
