mod common;

use rusty_scorecard::score::{NET_SCORE_NOT_AVAILABLE, PlayerCard, RoundTotals, strip_marker};

const FRONT: [i32; 9] = [5, 4, 4, 6, 3, 5, 4, 4, 5];
const BACK: [i32; 9] = [4, 6, 3, 5, 5, 4, 4, 5, 6];

fn full_card() -> Vec<i32> {
    FRONT.iter().chain(BACK.iter()).copied().collect()
}

#[test]
fn test_front_nine_with_no_strokes() {
    let ranks: Vec<i32> = (1..=9).collect();
    let card = PlayerCard::new(FRONT.to_vec(), &ranks, 0);
    assert_eq!(card.out_strokes(), 40);
    for hole in 0..9 {
        assert_eq!(card.hole_net_score(hole), FRONT[hole]);
        assert_eq!(card.hole_display(hole), FRONT[hole].to_string());
    }
}

#[test]
fn test_full_round_totals() {
    let card = PlayerCard::new(full_card(), &common::RANKS, 13);
    assert_eq!(
        card.totals(),
        RoundTotals {
            out_strokes: 40,
            in_strokes: 42,
            total_strokes: 82,
            net_total: 69,
        }
    );
}

#[test]
fn test_net_per_hole_uses_rank() {
    let card = PlayerCard::new(full_card(), &common::RANKS, 13);
    // hole 4 is rank 1: one stroke
    assert_eq!(card.allocation(3), 1);
    assert_eq!(card.hole_net_score(3), 5);
    assert_eq!(card.hole_display(3), ".6");
    // hole 3 is rank 17: none
    assert_eq!(card.allocation(2), 0);
    assert_eq!(card.hole_net_score(2), 4);
    assert_eq!(card.hole_display(2), "4");

    let net_sum: i32 = (0..18).map(|h| card.hole_net_score(h)).sum();
    assert_eq!(net_sum, card.net_total());
}

#[test]
fn test_unscored_holes_are_not_available() {
    let mut strokes = full_card();
    strokes[4] = 0;
    strokes[17] = 0;
    let card = PlayerCard::new(strokes, &common::RANKS, 25);
    assert_eq!(card.hole_net_score(4), NET_SCORE_NOT_AVAILABLE);
    assert_eq!(card.hole_net_score(17), NET_SCORE_NOT_AVAILABLE);
    assert_eq!(card.hole_display(4), "");
    assert_eq!(card.hole_net_display(17), "");
    // unplayed holes count as zero
    assert_eq!(card.out_strokes(), 37);
    assert_eq!(card.in_strokes(), 36);
    // outside the tee
    assert_eq!(card.hole_net_score(30), NET_SCORE_NOT_AVAILABLE);
}

#[test]
fn test_display_keeps_gross_recoverable() {
    for ch in [-4, 0, 9, 18, 27, 40] {
        let card = PlayerCard::new(full_card(), &common::RANKS, ch);
        for hole in 0..18 {
            let shown = card.hole_display(hole);
            assert_eq!(strip_marker(&shown), Some(card.strokes(hole)), "ch {ch} hole {hole}");
            let prefix = match card.allocation(hole) {
                a if a <= 0 => "",
                1 => ".",
                _ => ":",
            };
            assert!(shown.starts_with(prefix));
        }
    }
}

#[test]
fn test_big_handicap_eagle_nets_below_one() {
    let mut strokes = full_card();
    // par 5 second hole (rank 3), eagle with three strokes received
    strokes[1] = 3;
    let card = PlayerCard::new(strokes, &common::RANKS, 40);
    assert_eq!(card.allocation(1), 3);
    assert_eq!(card.hole_net_score(1), 0);
    assert_eq!(card.hole_net_display(1), ":0");
    assert_eq!(card.hole_net_score_clamped(1), NET_SCORE_NOT_AVAILABLE);
}
