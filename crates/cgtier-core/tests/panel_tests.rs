//! Tests for the tier list control panel
//!
//! Drives `TierlistPanel` against an in-memory playlist page.

use cgtier_core::{
    Error, NoDelay, PageContext, PlayStyle, PlaylistAction, PlaylistForm, PlaylistHost, Result,
    SyncDriver, Tier, TierList, TierListData, TierSelection, TierSong, TierlistPanel,
};

#[derive(Default)]
struct MemoryPage {
    sent: Vec<PlaylistForm>,
    fail_on: Vec<usize>,
    reloads: usize,
}

impl PlaylistHost for MemoryPage {
    fn send(&mut self, form: &PlaylistForm) -> Result<()> {
        self.sent.push(form.clone());
        if self.fail_on.contains(&self.sent.len()) {
            return Err(Error::Http("Connection failed: refused".to_string()));
        }
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        self.reloads += 1;
        Ok(())
    }
}

fn dataset() -> TierListData {
    let mut tier = Tier::new("A+", 11.8);
    for i in 0..7u32 {
        tier.songs.push(TierSong {
            song_id: 1000 + i,
            song_name: format!("song {}", i),
            versions: if i == 3 {
                vec!["30".to_string()]
            } else {
                vec!["30".to_string(), "31".to_string()]
            },
        });
    }
    let mut hard = TierList::new("Hard");
    hard.tiers.push(tier);

    TierListData {
        dp: vec![],
        sp: vec![hard],
    }
}

fn page(version: &str) -> PageContext {
    PageContext {
        game_version: version.to_string(),
        playlist_count: 5,
        max_songs_per_playlist: 3,
    }
}

fn selection() -> TierSelection {
    TierSelection {
        play_style: PlayStyle::Sp,
        tier_list_name: "Hard".to_string(),
        tier: "A+".to_string(),
        start_offset: 0,
        first_playlist: 1,
    }
}

#[test]
fn test_plan_filters_by_game_version() {
    let data = dataset();
    let panel = TierlistPanel::new(&data, page("31"), SyncDriver::new(NoDelay)).unwrap();

    let chunks = panel.plan(&selection()).unwrap();
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].song_ids, vec![1000, 1001, 1002]);
    assert_eq!(chunks[1].song_ids, vec![1004, 1005, 1006]);
    assert_eq!(chunks[0].name, "Hard Aplus 1");
}

#[test]
fn test_overwrite_sends_saves_and_reloads() {
    let data = dataset();
    let panel = TierlistPanel::new(&data, page("30"), SyncDriver::new(NoDelay)).unwrap();
    let mut host = MemoryPage::default();
    let mut log: Vec<String> = Vec::new();

    let mut sel = selection();
    sel.first_playlist = 2;
    let report = panel.overwrite_playlists(&mut host, &mut log, &sel).unwrap();

    assert!(report.reloaded);
    let slots: Vec<usize> = host.sent.iter().map(|f| f.index).collect();
    assert_eq!(slots, vec![1, 2, 3]);
    assert_eq!(host.sent[2].song_ids, vec![1006]);
    assert_eq!(host.sent[0].internal_ids_csv(), "1000,1001,1002");
    assert_eq!(log[0], "Selected playstyle: sp");
    assert_eq!(log[1], "Selected tierlist name: Hard");
    assert_eq!(log[2], "Selected tier: A+");
    assert_eq!(log[3], "Saving playlist Hard Aplus 1...");
}

#[test]
fn test_overwrite_without_songs_sends_nothing() {
    let data = dataset();
    let panel = TierlistPanel::new(&data, page("29"), SyncDriver::new(NoDelay)).unwrap();
    let mut host = MemoryPage::default();
    let mut log: Vec<String> = Vec::new();

    let report = panel
        .overwrite_playlists(&mut host, &mut log, &selection())
        .unwrap();

    assert!(report.items.is_empty());
    assert!(!report.reloaded);
    assert!(host.sent.is_empty());
    assert_eq!(host.reloads, 0);
    assert_eq!(
        log.last().unwrap(),
        "This tier contains no songs for the current game version"
    );
}

#[test]
fn test_offset_past_end_is_not_an_empty_tier() {
    let data = dataset();
    let panel = TierlistPanel::new(&data, page("31"), SyncDriver::new(NoDelay)).unwrap();
    let mut host = MemoryPage::default();
    let mut log: Vec<String> = Vec::new();

    let mut sel = selection();
    sel.start_offset = 100;
    let report = panel.overwrite_playlists(&mut host, &mut log, &sel).unwrap();

    assert!(host.sent.is_empty());
    assert!(report.items.is_empty());
    assert!(report.reloaded);
    assert_eq!(host.reloads, 1);
    let empty_tier = "This tier contains no songs for the current game version";
    assert!(!log.iter().any(|line| line == empty_tier));
}

#[test]
fn test_overwrite_failure_keeps_going() {
    let data = dataset();
    let panel = TierlistPanel::new(&data, page("30"), SyncDriver::new(NoDelay)).unwrap();
    let mut host = MemoryPage {
        fail_on: vec![1],
        ..Default::default()
    };
    let mut log: Vec<String> = Vec::new();

    let report = panel
        .overwrite_playlists(&mut host, &mut log, &selection())
        .unwrap();

    assert_eq!(host.sent.len(), 3);
    assert_eq!(report.failed_count(), 1);
    assert!(!report.reloaded);
    assert_eq!(host.reloads, 0);
    assert!(log.contains(&"Error: Connection failed: refused".to_string()));
}

#[test]
fn test_delete_all_playlists() {
    let data = dataset();
    let panel = TierlistPanel::new(&data, page("31"), SyncDriver::new(NoDelay)).unwrap();
    let mut host = MemoryPage::default();
    let mut log: Vec<String> = Vec::new();

    let report = panel
        .delete_all_playlists(&mut host, &mut log, PlayStyle::Dp)
        .unwrap();

    assert_eq!(report.items.len(), 5);
    assert!(host.sent.iter().all(|f| f.action == PlaylistAction::Delete));
    assert!(host.sent.iter().all(|f| f.name.is_empty()));
    assert_eq!(host.reloads, 1);
}

#[test]
fn test_unknown_tier_is_an_error() {
    let data = dataset();
    let panel = TierlistPanel::new(&data, page("31"), SyncDriver::new(NoDelay)).unwrap();

    let mut sel = selection();
    sel.tier = "S".to_string();
    assert!(matches!(panel.plan(&sel), Err(Error::TierNotFound(_))));

    sel.play_style = PlayStyle::Dp;
    assert!(matches!(
        panel.plan(&sel),
        Err(Error::TierListNotFound { .. })
    ));
}

#[test]
fn test_page_without_game_version_is_rejected() {
    let data = dataset();
    let result = TierlistPanel::new(&data, page(""), SyncDriver::new(NoDelay));
    assert!(matches!(result, Err(Error::PlaylistsUnsupported)));
}
