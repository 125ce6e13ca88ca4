use gripline_foundation::{DragBinder, PointerButton, PointerButtons};
use gripline_testing::PointerRobot;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Gripline Drag Demo ===");
    println!("Runs a scripted press/drag/release through the robot:");
    println!("  - a primary-button drag that relays every move");
    println!("  - a secondary-button press the condition rejects");
    println!("  - a post-release move that reaches nothing");
    println!();

    let mut robot = PointerRobot::new();

    let binder = DragBinder::new(
        robot.input(),
        |e| log::info!("drag started at ({:.1}, {:.1})", e.global_position.x, e.global_position.y),
        |e| log::info!("dragging through ({:.1}, {:.1})", e.global_position.x, e.global_position.y),
        |e| log::info!("drag ended at ({:.1}, {:.1})", e.global_position.x, e.global_position.y),
    )
    .with_condition(|e| e.buttons.contains(PointerButton::Primary));
    robot.attach_press_handler(binder.press_handler());

    log::info!("primary-button drag from (10, 10) to (80, 40)");
    robot.drag((10.0, 10.0), (80.0, 40.0), 5);

    log::info!("secondary-button press (condition rejects it)");
    let secondary = PointerButtons::new().with(PointerButton::Secondary);
    robot.press_with_buttons(40.0, 40.0, secondary);
    robot.release();

    log::info!("move with no session active (relays nothing)");
    robot.move_to(100.0, 100.0);

    log::info!(
        "done; listeners remaining: {} move, {} release",
        robot.input().move_listener_count(),
        robot.input().release_listener_count()
    );
}
