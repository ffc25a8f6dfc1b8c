use super::handler;
use warp::Filter;

/// Route table for the public surface.
///
/// | method | path           | handler         |
/// |--------|----------------|-----------------|
/// | GET    | `/public/home` | [`handler::home`] |
pub fn routes() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    // path before method, so a wrong method on a known path reports 405 instead of 404
    warp::path("public")
        .and(warp::path("home"))
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handler::home)
}
