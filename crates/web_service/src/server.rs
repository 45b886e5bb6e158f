use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::{error, info};
use session_manager::{FileSessionStorage, SessionManager};
use tokio::sync::oneshot;

use crate::controllers::{list_controller, todo_controller};
use crate::TodoStore;

const DEFAULT_WORKER_COUNT: usize = 4;

/// Register every route. The todo controller comes first so its deeper
/// paths take precedence over the `/lists/{list_id}` routes.
pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(todo_controller::config)
        .configure(list_controller::config);
}

fn build_store(session_dir: PathBuf) -> web::Data<TodoStore> {
    web::Data::new(SessionManager::new(FileSessionStorage::new(session_dir)))
}

/// Run the server on localhost until it fails or is shut down externally
pub async fn run(session_dir: PathBuf, port: u16) -> Result<(), String> {
    info!("Starting to-do web service...");

    let store = build_store(session_dir);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(format!("127.0.0.1:{port}"))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("To-do web service listening on http://127.0.0.1:{port}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}

/// A stoppable server handle for embedding the service in a host process
pub struct WebService {
    shutdown_tx: Option<oneshot::Sender<()>>,
    server_handle: Option<tokio::task::JoinHandle<()>>,
    session_dir: PathBuf,
}

impl WebService {
    pub fn new(session_dir: PathBuf) -> Self {
        Self {
            shutdown_tx: None,
            server_handle: None,
            session_dir,
        }
    }

    pub async fn start(&mut self, port: u16) -> Result<(), String> {
        info!("Starting to-do web service...");
        if self.server_handle.is_some() {
            return Err("Web service is already running".to_string());
        }

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let store = build_store(self.session_dir.clone());

        let server = HttpServer::new(move || {
            App::new()
                .app_data(store.clone())
                .wrap(Cors::permissive())
                .configure(app_config)
        })
        .workers(DEFAULT_WORKER_COUNT)
        .bind(format!("127.0.0.1:{port}"))
        .map_err(|e| format!("Failed to bind server: {e}"))?
        .run();

        let server_handle = tokio::spawn(async move {
            tokio::select! {
                result = server => {
                    if let Err(e) = result {
                        error!("Web server error: {}", e);
                    }
                }
                _ = &mut shutdown_rx => {
                    info!("Web service shutdown signal received");
                }
            }
        });

        self.shutdown_tx = Some(shutdown_tx);
        self.server_handle = Some(server_handle);

        info!("Web service started successfully");
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), String> {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            if shutdown_tx.send(()).is_err() {
                error!("Failed to send shutdown signal");
            }
        }

        if let Some(handle) = self.server_handle.take() {
            if let Err(e) = handle.await {
                error!("Error waiting for server shutdown: {}", e);
                return Err(format!("Error waiting for server shutdown: {e}"));
            }
        }

        info!("Web service stopped successfully");
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.server_handle.is_some()
    }
}

impl Drop for WebService {
    fn drop(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }
    }
}
