use super::*;

#[test]
fn slots_round_trip_through_setters() {
    let mut t = Trapezoid::default();
    for (i, slot) in QuadSlot::ALL.into_iter().enumerate() {
        t.set_slot(slot, Point::new(i as f64, -(i as f64)));
    }
    assert_eq!(t.points()[2], Point::new(2.0, -2.0));
    assert_eq!(t.slot(QuadSlot::D), Point::new(3.0, -3.0));
    for (i, slot) in QuadSlot::ALL.into_iter().enumerate() {
        assert_eq!(t.slot(slot), t.points()[i]);
    }
}

#[test]
fn advance_moves_far_pair_to_near_roles() {
    for edge in Edge::ALL {
        let mut t = Trapezoid::default();
        t.set_corner(edge, CornerRole::NearA, Point::new(0.0, 0.0));
        t.set_corner(edge, CornerRole::NearB, Point::new(1.0, 0.0));
        t.set_corner(edge, CornerRole::FarA, Point::new(0.0, 5.0));
        t.set_corner(edge, CornerRole::FarB, Point::new(1.0, 5.0));
        t.advance(edge);
        assert_eq!(t.corner(edge, CornerRole::NearA), Point::new(0.0, 5.0));
        assert_eq!(t.corner(edge, CornerRole::NearB), Point::new(1.0, 5.0));
    }
}
