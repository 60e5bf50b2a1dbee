mod common;

use rusty_scorecard::score::{PlayerCard, stroke_allocation, stroke_allocations};

#[test]
fn test_allocation_is_conserved_on_a_real_card() {
    for ch in 0..=54 {
        let total: i32 = stroke_allocations(&common::RANKS, ch).iter().sum();
        assert_eq!(total, ch, "course handicap {ch}");
    }

    let front: Vec<i32> = (1..=9).collect();
    for ch in 0..=27 {
        let total: i32 = stroke_allocations(&front, ch).iter().sum();
        assert_eq!(total, ch, "nine hole course handicap {ch}");
    }
}

#[test]
fn test_ten_strokes_go_to_the_ten_hardest_holes() {
    let allocs = stroke_allocations(&common::RANKS, 10);
    for (rank, alloc) in common::RANKS.iter().zip(&allocs) {
        let expected = i32::from(*rank <= 10);
        assert_eq!(*alloc, expected, "rank {rank}");
    }
}

#[test]
fn test_twenty_strokes_double_up_on_two_holes() {
    let allocs = stroke_allocations(&common::RANKS, 20);
    let doubles: Vec<i32> = common::RANKS
        .iter()
        .zip(&allocs)
        .filter(|(_, a)| **a == 2)
        .map(|(rank, _)| *rank)
        .collect();
    assert_eq!(doubles.len(), 2);
    assert!(doubles.contains(&1));
    assert!(doubles.contains(&2));
    assert_eq!(allocs.iter().filter(|a| **a == 1).count(), 16);
    assert_eq!(allocs.iter().sum::<i32>(), 20);
}

#[test]
fn test_n_plus_k_gives_k_double_holes() {
    for n in [9, 18] {
        for k in 1..n {
            let doubles = (1..=n)
                .filter(|rank| stroke_allocation(*rank, n + k, n) == 2)
                .count();
            let singles = (1..=n)
                .filter(|rank| stroke_allocation(*rank, n + k, n) == 1)
                .count();
            assert_eq!(doubles, usize::try_from(k).unwrap());
            assert_eq!(singles, usize::try_from(n - k).unwrap());
        }
    }
}

#[test]
fn test_plus_handicap_gives_back_on_easiest_holes() {
    let allocs = stroke_allocations(&common::RANKS, -2);
    for (rank, alloc) in common::RANKS.iter().zip(&allocs) {
        let expected = if *rank >= 17 { -1 } else { 0 };
        assert_eq!(*alloc, expected, "rank {rank}");
    }

    // deeper than a full round: everyone gives one, easiest five give two
    assert_eq!(stroke_allocation(1, -23, 18), -1);
    assert_eq!(stroke_allocation(13, -23, 18), -1);
    assert_eq!(stroke_allocation(14, -23, 18), -2);
    assert_eq!(stroke_allocation(18, -23, 18), -2);
}

#[test]
fn test_split_nine_ranks_give_out_exactly_the_course_handicap() {
    let split: Vec<i32> = (1..=9).chain(1..=9).collect();
    for ch in 0..=54 {
        let total: i32 = stroke_allocations(&split, ch).iter().sum();
        assert_eq!(total, ch, "course handicap {ch}");
    }

    // four strokes: the two hardest holes on each nine
    let allocs = stroke_allocations(&split, 4);
    assert_eq!(&allocs[..9], &[1, 1, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(&allocs[9..], &[1, 1, 0, 0, 0, 0, 0, 0, 0]);

    let card = PlayerCard::new(vec![4; 18], &split, 10);
    let summed_nets: i32 = (0..18).map(|hole| card.hole_net_score(hole)).sum();
    assert_eq!(summed_nets, card.net_total());
    assert_eq!(card.net_total(), 62);
}
