/// Most recent pointer location in viewport client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// CSS `background` value for the glow that follows the pointer.
    pub fn gradient(&self) -> String {
        format!(
            "radial-gradient(circle at {}px {}px, rgba(120, 0, 255, 0.4) 0%, transparent 60%)",
            self.x, self.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_origin() {
        assert_eq!(PointerPosition::default(), PointerPosition::new(0, 0));
    }

    #[test]
    fn test_gradient_centers_on_pointer() {
        let css = PointerPosition::new(150, 300).gradient();
        assert_eq!(
            css,
            "radial-gradient(circle at 150px 300px, rgba(120, 0, 255, 0.4) 0%, transparent 60%)"
        );
        assert!(PointerPosition::default()
            .gradient()
            .contains("circle at 0px 0px"));
    }

    #[test]
    fn test_negative_coordinates_pass_through() {
        // pointer events can report positions left of or above the viewport
        let css = PointerPosition::new(-4, -12).gradient();
        assert!(css.contains("circle at -4px -12px"));
    }
}
