use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/host/roombuild")]
    RoomBuild,
    #[at("/host/notice")]
    HostNotice,
    #[at("/player")]
    Join,
    #[at("/teambuild")]
    TeamBuild,
    #[at("/lobby")]
    Lobby,
    #[at("/waiting")]
    Waiting,
    #[at("/bagselect")]
    BagSelect,
    #[at("/sceneinfo")]
    SceneInfo,
    #[at("/404")]
    #[not_found]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn routes_resolve_from_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Landing));
        assert_eq!(Route::recognize("/host/roombuild"), Some(Route::RoomBuild));
        assert_eq!(Route::recognize("/player"), Some(Route::Join));
        assert_eq!(Route::recognize("/bagselect"), Some(Route::BagSelect));
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::TeamBuild.to_path(), "/teambuild");
        assert_eq!(Route::SceneInfo.to_path(), "/sceneinfo");
        assert_eq!(Route::HostNotice.to_path(), "/host/notice");
    }
}
