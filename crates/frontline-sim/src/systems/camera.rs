//! Camera follow: ease toward the player's eye and take the look angles.

use frontline_core::constants::CAMERA_FOLLOW_LERP;
use frontline_core::types::Camera;

use crate::game_state::Player;
use crate::input::InputState;

pub fn run(camera: &mut Camera, player: &Player, input: &InputState) {
    camera.position = camera.position.lerp(player.eye_position(), CAMERA_FOLLOW_LERP);
    camera.yaw = input.yaw();
    camera.pitch = input.pitch();
}
