//! Single binary web server: game page from templates/, images from static/, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Env: HOST, PORT, ROSTER_CSV (path to an `id,image_ref` roster), BRACKET_SEED (u64, reproducible shuffles).

use actix_files::Files;
use actix_web::{
    get, post,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use bracket_vote::{
    advance_if_ready, current_matchup, default_roster, initialize, load_roster_file,
    restart_tournament, select, Contestant, IdentityShuffler, RandomShuffler, Tournament, TournamentError,
    TournamentId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// Server-wide settings read once at startup.
struct Config {
    roster: Vec<Contestant>,
    /// When set, every new bracket is shuffled from `seed + n` for the n-th tournament.
    seed: Option<u64>,
    seed_counter: AtomicU64,
}

impl Config {
    fn from_env() -> Result<Self, TournamentError> {
        let roster = match std::env::var("ROSTER_CSV") {
            Ok(path) => load_roster_file(path)?,
            Err(_) => default_roster(),
        };
        let seed = std::env::var("BRACKET_SEED").ok().and_then(|s| s.parse().ok());
        Ok(Self {
            roster,
            seed,
            seed_counter: AtomicU64::new(0),
        })
    }

    fn new_tournament(&self) -> Result<Tournament, TournamentError> {
        match self.seed {
            Some(seed) => {
                let n = self.seed_counter.fetch_add(1, Ordering::Relaxed);
                initialize(self.roster.clone(), &mut RandomShuffler::seeded(seed.wrapping_add(n)))
            }
            None => initialize(self.roster.clone(), &mut RandomShuffler::thread()),
        }
    }

    fn restart(&self, tournament: &mut Tournament) -> Result<(), TournamentError> {
        match self.seed {
            Some(seed) => {
                let n = self.seed_counter.fetch_add(1, Ordering::Relaxed);
                restart_tournament(
                    tournament,
                    self.roster.clone(),
                    &mut RandomShuffler::seeded(seed.wrapping_add(n)),
                )
            }
            None => restart_tournament(tournament, self.roster.clone(), &mut RandomShuffler::thread()),
        }
    }
}

/// In-memory state: many tournaments by ID (one per browser session). Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// What the page renders: full state plus the pair to show, if any.
#[derive(Serialize)]
struct TournamentView<'a> {
    #[serde(flatten)]
    tournament: &'a Tournament,
    current_matchup: Option<[&'a Contestant; 2]>,
    total_rounds: u32,
}

impl<'a> TournamentView<'a> {
    fn new(tournament: &'a Tournament) -> Self {
        Self {
            tournament,
            current_matchup: current_matchup(tournament).map(|(l, r)| [l, r]),
            total_rounds: tournament.total_rounds(),
        }
    }
}

#[derive(Deserialize)]
struct SelectBody {
    choice: usize,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn bad_request(e: TournamentError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "bracket-vote",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new shuffled tournament (client stores the id for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, config: Data<Config>) -> HttpResponse {
    let tournament = match config.new_tournament() {
        Ok(t) => t,
        Err(e) => return bad_request(e),
    };
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = g.entry(id).or_insert(TournamentEntry {
        tournament,
        last_activity: Instant::now(),
    });
    HttpResponse::Ok().json(TournamentView::new(&entry.tournament))
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(TournamentView::new(&entry.tournament))
        }
        None => not_found(),
    }
}

/// Pick one side of the current matchup (0 = left, 1 = right).
#[post("/api/tournaments/{id}/select")]
async fn api_select(state: AppState, path: Path<TournamentPath>, body: Json<SelectBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match select(t, body.choice) {
        Ok(()) => HttpResponse::Ok().json(TournamentView::new(t)),
        Err(e) => bad_request(e),
    }
}

/// Start the next round or finish the tournament if the current round is resolved.
#[post("/api/tournaments/{id}/advance")]
async fn api_advance(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    advance_if_ready(t);
    HttpResponse::Ok().json(TournamentView::new(t))
}

/// Restart tournament: fresh shuffle of the roster, same id.
#[post("/api/tournaments/{id}/restart")]
async fn api_restart_tournament(
    state: AppState,
    config: Data<Config>,
    path: Path<TournamentPath>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match config.restart(t) {
        Ok(()) => HttpResponse::Ok().json(TournamentView::new(t)),
        Err(e) => bad_request(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);

    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    // Fail at startup rather than on the first request.
    if let Err(e) = initialize(config.roster.clone(), &mut IdentityShuffler) {
        log::error!("Roster rejected: {}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
    }
    if let Some(seed) = config.seed {
        log::info!("Using seeded shuffles (BRACKET_SEED={})", seed);
    }
    let config = Data::new(config);

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: every 30 minutes, remove tournaments inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(config.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_select)
            .service(api_advance)
            .service(api_restart_tournament)
            .service(Files::new("/", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
