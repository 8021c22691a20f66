//! Integration tests for roster sources.

use bracket_vote::{default_roster, load_roster_csv, TournamentError, DEFAULT_ROSTER_SIZE};

#[test]
fn default_roster_has_eight_numbered_images() {
    let roster = default_roster();
    assert_eq!(roster.len(), DEFAULT_ROSTER_SIZE);
    for (i, c) in roster.iter().enumerate() {
        let id = i as u32 + 1;
        assert_eq!(c.id, id);
        assert_eq!(c.image_ref, format!("/{id}.jpeg"));
    }
}

#[test]
fn csv_roster_is_read_in_file_order() {
    let data = "id,image_ref\n4,/a.png\n 2 , /b.png \n";
    let roster = load_roster_csv(data.as_bytes()).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].id, 4);
    assert_eq!(roster[0].image_ref, "/a.png");
    assert_eq!(roster[1].id, 2);
    assert_eq!(roster[1].image_ref, "/b.png");
}

#[test]
fn csv_roster_with_bad_id_is_an_error() {
    let data = "id,image_ref\nfour,/a.png\n";
    assert!(matches!(
        load_roster_csv(data.as_bytes()),
        Err(TournamentError::RosterFile(_))
    ));
}
