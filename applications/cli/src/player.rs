/// Scripted transport actions against a catalog and an in-memory engine
use crate::error::{CliError, Result};
use maxiplay_core::catalog::AudioList;
use maxiplay_core::{AudioId, AudioItem, Catalog, PlaylistId};
use maxiplay_playback::{
    MemoryEngine, PlaybackConfig, PlaybackController, PlaybackEvent, PlayerStatus, Session,
    SessionStore,
};
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Where a pressed item is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    /// One of the named catalog lists
    Named(AudioList),
    /// Audios of a playlist
    Playlist(PlaylistId),
}

impl ListSource {
    /// Fetch the items of this list
    pub async fn fetch(&self, catalog: &dyn Catalog) -> Result<Vec<AudioItem>> {
        match self {
            Self::Named(list) => Ok(list.fetch(catalog).await?),
            Self::Playlist(id) => Ok(catalog.playlist_audios(id).await?.audios),
        }
    }
}

impl FromStr for ListSource {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(id) = s.strip_prefix("playlist:") {
            if id.is_empty() {
                return Err(CliError::UnknownList(s.to_string()));
            }
            return Ok(Self::Playlist(PlaylistId::new(id)));
        }

        AudioList::parse(s)
            .map(Self::Named)
            .ok_or_else(|| CliError::UnknownList(s.to_string()))
    }
}

/// One scripted user intent
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// `press:<id>` or `press:<id>@<list>`
    Press {
        id: AudioId,
        list: Option<ListSource>,
    },
    Toggle,
    Next,
    Previous,
    /// `seek:<secs>`
    Seek(Duration),
    /// `skip:<±secs>`, or `skip:+` / `skip:-` for the configured interval
    Skip(SkipBy),
    /// `rate:<x>`
    Rate(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkipBy {
    Forward,
    Backward,
    Seconds(f64),
}

impl FromStr for Action {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (s, None),
        };

        match (verb, arg) {
            ("toggle", None) => Ok(Self::Toggle),
            ("next", None) => Ok(Self::Next),
            ("prev" | "previous", None) => Ok(Self::Previous),
            ("press", Some(arg)) => {
                let (id, list) = match arg.split_once('@') {
                    Some((id, list)) => (id, Some(list.parse::<ListSource>()?)),
                    None => (arg, None),
                };
                if id.is_empty() {
                    return Err(CliError::action(s, "missing audio id"));
                }
                Ok(Self::Press {
                    id: AudioId::new(id),
                    list,
                })
            }
            ("seek", Some(arg)) => {
                let secs: f64 = arg
                    .parse()
                    .map_err(|_| CliError::action(s, "expected seconds"))?;
                Duration::try_from_secs_f64(secs)
                    .map(Self::Seek)
                    .map_err(|_| CliError::action(s, "position must be a non-negative number"))
            }
            ("skip", Some("+")) => Ok(Self::Skip(SkipBy::Forward)),
            ("skip", Some("-")) => Ok(Self::Skip(SkipBy::Backward)),
            ("skip", Some(arg)) => arg
                .parse()
                .map(|secs| Self::Skip(SkipBy::Seconds(secs)))
                .map_err(|_| CliError::action(s, "expected signed seconds")),
            ("rate", Some(arg)) => arg
                .parse()
                .map(Self::Rate)
                .map_err(|_| CliError::action(s, "expected a rate multiplier")),
            _ => Err(CliError::action(s, "unknown action")),
        }
    }
}

/// State after one action, as printed by the CLI
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub status: PlayerStatus,
    pub current_item: Option<AudioId>,
    pub queue: Vec<AudioId>,
    pub playback_rate: f32,
    pub events: Vec<PlaybackEvent>,
}

/// Headless player: a controller over `MemoryEngine`
pub struct Player {
    catalog: Arc<dyn Catalog>,
    default_list: ListSource,
    controller: PlaybackController,
    session: Arc<SessionStore>,
}

impl Player {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        default_list: ListSource,
        config: PlaybackConfig,
    ) -> Result<Self> {
        let session = Arc::new(SessionStore::with_session(Session {
            playback_rate: config.initial_rate,
            ..Session::default()
        }));
        let controller =
            PlaybackController::new(Arc::new(MemoryEngine::new()), session.clone(), config)?;

        Ok(Self {
            catalog,
            default_list,
            controller,
            session,
        })
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Apply one action
    pub async fn apply(&self, action: &Action) -> Result<()> {
        match action {
            Action::Press { id, list } => {
                let source = list.as_ref().unwrap_or(&self.default_list);
                let items = source.fetch(self.catalog.as_ref()).await?;
                let item = items
                    .iter()
                    .find(|i| &i.id == id)
                    .cloned()
                    .ok_or_else(|| CliError::action(id.as_str(), "not in the selected list"))?;
                self.controller.on_audio_press(&item, &items).await?;
            }
            Action::Toggle => self.controller.toggle_play_pause().await?,
            Action::Next => self.controller.on_next_press().await?,
            Action::Previous => self.controller.on_previous_press().await?,
            Action::Seek(position) => self.controller.seek_to(*position).await?,
            Action::Skip(SkipBy::Forward) => self.controller.skip_forward().await?,
            Action::Skip(SkipBy::Backward) => self.controller.skip_backward().await?,
            Action::Skip(SkipBy::Seconds(secs)) => self.controller.skip_by(*secs).await?,
            Action::Rate(rate) => self.controller.apply_playback_rate(*rate).await?,
        }
        Ok(())
    }

    /// Parse and apply `raw`, reporting the resulting state
    ///
    /// Failed actions are reported, not fatal.
    pub async fn run(&self, raw: &str) -> Report {
        let outcome = match raw.parse::<Action>() {
            Ok(action) => self.apply(&action).await,
            Err(e) => Err(e),
        };

        let error = match outcome {
            Ok(()) => {
                info!(action = raw, "Action applied");
                None
            }
            Err(e) => {
                warn!(action = raw, error = %e, "Action failed");
                Some(e.to_string())
            }
        };

        let session = self.session.snapshot();
        Report {
            action: raw.to_string(),
            error,
            status: self.controller.status().await,
            current_item: session.current_item.map(|i| i.id),
            queue: session.current_queue.iter().map(|i| i.id.clone()).collect(),
            playback_rate: session.playback_rate,
            events: self.controller.drain_events().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Snapshot, SnapshotCatalog};
    use maxiplay_core::catalog::AudiosEnvelope;
    use maxiplay_core::{Category, CompletePlaylist, Owner, ProfileId};

    fn item(id: &str) -> AudioItem {
        AudioItem {
            id: AudioId::new(id),
            title: id.to_string(),
            about: String::new(),
            category: Category::Science,
            file: format!("https://cdn.example.com/{}.mp3", id),
            poster: None,
            owner: Owner {
                id: ProfileId::new("u1"),
                name: "Ada".to_string(),
            },
        }
    }

    fn player() -> Player {
        let snapshot = Snapshot {
            latest: AudiosEnvelope {
                audios: vec![item("a"), item("b"), item("c")],
            },
            playlist_audios: vec![CompletePlaylist {
                id: PlaylistId::new("mix"),
                title: "Mix".to_string(),
                audios: vec![item("x"), item("y")],
            }],
            ..Snapshot::default()
        };

        Player::new(
            Arc::new(SnapshotCatalog::new(snapshot)),
            ListSource::Named(AudioList::Latest),
            PlaybackConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!("toggle".parse::<Action>().unwrap(), Action::Toggle);
        assert_eq!("prev".parse::<Action>().unwrap(), Action::Previous);
        assert_eq!(
            "press:a1".parse::<Action>().unwrap(),
            Action::Press {
                id: AudioId::new("a1"),
                list: None
            }
        );
        assert_eq!(
            "press:x@playlist:mix".parse::<Action>().unwrap(),
            Action::Press {
                id: AudioId::new("x"),
                list: Some(ListSource::Playlist(PlaylistId::new("mix")))
            }
        );
        assert_eq!(
            "seek:12.5".parse::<Action>().unwrap(),
            Action::Seek(Duration::from_millis(12_500))
        );
        assert_eq!(
            "skip:-30".parse::<Action>().unwrap(),
            Action::Skip(SkipBy::Seconds(-30.0))
        );
        assert_eq!(
            "skip:+".parse::<Action>().unwrap(),
            Action::Skip(SkipBy::Forward)
        );
        assert_eq!("rate:1.5".parse::<Action>().unwrap(), Action::Rate(1.5));
    }

    #[test]
    fn test_parse_rejects_bad_actions() {
        assert!("dance".parse::<Action>().is_err());
        assert!("seek:-1".parse::<Action>().is_err());
        assert!("press:".parse::<Action>().is_err());
        assert!("press:a@nowhere".parse::<Action>().is_err());
        assert!("next:1".parse::<Action>().is_err());
    }

    #[tokio::test]
    async fn test_script_across_lists() {
        let player = player();

        let report = player.run("press:b").await;
        assert!(report.error.is_none());
        assert_eq!(report.status, PlayerStatus::Playing);
        assert_eq!(report.current_item, Some(AudioId::new("b")));
        assert_eq!(report.queue.len(), 3);

        let report = player.run("next").await;
        assert_eq!(report.current_item, Some(AudioId::new("c")));

        let report = player.run("press:y@playlist:mix").await;
        assert_eq!(report.current_item, Some(AudioId::new("y")));
        assert_eq!(report.queue, vec![AudioId::new("x"), AudioId::new("y")]);
        assert!(report
            .events
            .contains(&PlaybackEvent::QueueReplaced { length: 2 }));

        let report = player.run("toggle").await;
        assert_eq!(report.status, PlayerStatus::Paused);

        let report = player.run("rate:1.25").await;
        assert_eq!(report.playback_rate, 1.25);
    }

    #[tokio::test]
    async fn test_failed_action_is_reported() {
        let player = player();

        let report = player.run("press:zzz").await;
        assert!(report.error.is_some());
        assert_eq!(report.status, PlayerStatus::Empty);

        let report = player.run("rate:0").await;
        assert!(report.error.unwrap().contains("Invalid playback rate"));
    }
}
