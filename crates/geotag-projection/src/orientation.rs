use geotag_core::math::angle;
use geotag_core::Radians;

/// Ground orientation of a feature, clockwise from north.
///
/// `yaw` is the aircraft heading and `radians_from_image_top` the feature's
/// rotation measured clockwise from the top edge of the frame.
pub fn calculate_clockwise_radians_from_north(
    yaw: Radians,
    radians_from_image_top: Radians,
) -> Radians {
    angle::add(yaw, radians_from_image_top)
}
