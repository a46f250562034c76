use formdom::DomElement;

/// An element that can report a change.
pub trait ChangeTarget {
    fn element_id(&self) -> Option<&str>;

    fn attribute(&self, name: &str) -> Option<&str>;

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

impl ChangeTarget for DomElement {
    fn element_id(&self) -> Option<&str> {
        self.id()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attr(name)
    }

    fn has_class(&self, class: &str) -> bool {
        DomElement::has_class(self, class)
    }
}
