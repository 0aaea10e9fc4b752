use image_block_config::Direction;

use crate::resize::Edge;

/// Resize handles currently attached to the image wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandleSet {
    pub start: bool,
    pub end: bool,
}

impl HandleSet {
    pub const NONE: HandleSet = HandleSet {
        start: false,
        end: false,
    };
    pub const BOTH: HandleSet = HandleSet {
        start: true,
        end: true,
    };

    /// Handles offered on hover: only the sides with room to grow into
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Center => HandleSet::BOTH,
            Direction::FlexStart => HandleSet {
                start: false,
                end: true,
            },
            Direction::FlexEnd => HandleSet {
                start: true,
                end: false,
            },
        }
    }

    pub fn contains(self, edge: Edge) -> bool {
        match edge {
            Edge::Start => self.start,
            Edge::End => self.end,
        }
    }

    pub fn is_empty(self) -> bool {
        self == HandleSet::NONE
    }
}

/// Maps the block's alignment to its hover affordances.
///
/// Knows nothing about pointer coordinates; the only drag state it needs is
/// whether a drag is running when the pointer leaves.
#[derive(Debug, Clone)]
pub struct AlignmentController {
    direction: Direction,
    read_only: bool,
    hovered: bool,
    visible: HandleSet,
}

impl AlignmentController {
    pub fn new(direction: Direction, read_only: bool) -> Self {
        Self {
            direction,
            read_only,
            hovered: false,
            visible: HandleSet::NONE,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Flexbox keyword placing the image wrapper inside its row
    pub fn align_self(&self) -> &'static str {
        self.direction.as_str()
    }

    /// Apply a new alignment. Returns whether anything changed.
    pub fn apply(&mut self, direction: Direction) -> bool {
        if self.direction == direction {
            return false;
        }
        self.direction = direction;
        if self.hovered && !self.read_only {
            self.visible = HandleSet::for_direction(direction);
        }
        true
    }

    pub fn hover_enter(&mut self) {
        self.hovered = true;
        if !self.read_only {
            self.visible = HandleSet::for_direction(self.direction);
        }
    }

    /// Handles stay attached while a drag is running so they do not vanish
    /// under the pointer.
    pub fn hover_leave(&mut self, dragging: bool) {
        self.hovered = false;
        if !dragging {
            self.visible = HandleSet::NONE;
        }
    }

    pub fn drag_ended(&mut self) {
        if !self.hovered {
            self.visible = HandleSet::NONE;
        }
    }

    pub fn visible_handles(&self) -> HandleSet {
        self.visible
    }

    /// Hover highlight of the wrapper, kept in step with the handles
    pub fn is_highlighted(&self) -> bool {
        !self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Center, HandleSet::BOTH)]
    #[case(Direction::FlexStart, HandleSet { start: false, end: true })]
    #[case(Direction::FlexEnd, HandleSet { start: true, end: false })]
    fn test_hover_shows_handles_for_direction(#[case] direction: Direction, #[case] expected: HandleSet) {
        let mut alignment = AlignmentController::new(direction, false);
        assert_eq!(alignment.visible_handles(), HandleSet::NONE);

        alignment.hover_enter();

        assert_eq!(alignment.visible_handles(), expected);
        assert_eq!(alignment.align_self(), direction.as_str());
    }

    #[test]
    fn test_leave_hides_handles() {
        let mut alignment = AlignmentController::new(Direction::Center, false);
        alignment.hover_enter();

        alignment.hover_leave(false);

        assert_eq!(alignment.visible_handles(), HandleSet::NONE);
        assert!(!alignment.is_highlighted());
    }

    #[test]
    fn test_leave_during_drag_keeps_handles_until_release() {
        let mut alignment = AlignmentController::new(Direction::FlexStart, false);
        alignment.hover_enter();

        alignment.hover_leave(true);
        assert_eq!(alignment.visible_handles(), HandleSet::for_direction(Direction::FlexStart));
        assert!(alignment.is_highlighted());

        alignment.drag_ended();
        assert_eq!(alignment.visible_handles(), HandleSet::NONE);
    }

    #[test]
    fn test_release_while_hovered_keeps_handles() {
        let mut alignment = AlignmentController::new(Direction::Center, false);
        alignment.hover_enter();

        alignment.drag_ended();

        assert_eq!(alignment.visible_handles(), HandleSet::BOTH);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut alignment = AlignmentController::new(Direction::Center, false);

        assert!(alignment.apply(Direction::FlexEnd));
        alignment.hover_enter();
        let first = (alignment.visible_handles(), alignment.align_self());

        assert!(!alignment.apply(Direction::FlexEnd));
        let second = (alignment.visible_handles(), alignment.align_self());

        assert_eq!(first, second);
    }

    #[test]
    fn test_apply_while_hovered_refreshes_handles() {
        let mut alignment = AlignmentController::new(Direction::Center, false);
        alignment.hover_enter();

        alignment.apply(Direction::FlexEnd);

        assert_eq!(alignment.visible_handles(), HandleSet { start: true, end: false });
    }

    #[test]
    fn test_read_only_never_shows_handles() {
        let mut alignment = AlignmentController::new(Direction::Center, true);

        alignment.hover_enter();

        assert_eq!(alignment.visible_handles(), HandleSet::NONE);
    }

    #[test]
    fn test_handle_set_contains() {
        let left_aligned = HandleSet::for_direction(Direction::FlexStart);
        assert!(left_aligned.contains(Edge::End));
        assert!(!left_aligned.contains(Edge::Start));
    }
}
