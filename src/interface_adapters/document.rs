// In-memory page surface: applies view nodes to a page tree and records
// alerts and navigation requests for the host to act on.

use crate::domain::{Element, Node, Page, Route};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Goto(Route),
    Reload,
}

#[derive(Debug, Clone)]
pub struct Document {
    location: Route,
    root: Element,
    alerts: Vec<String>,
    navigation: Option<Navigation>,
}

impl Document {
    pub fn new(location: Route, root: Element) -> Self {
        Self {
            location,
            root,
            alerts: Vec::new(),
            navigation: None,
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn take_navigation(&mut self) -> Option<Navigation> {
        self.navigation.take()
    }

    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>{}", Node::from(self.root.clone()).to_html())
    }

    fn target_mut(&mut self, target: &str) -> Option<&mut Element> {
        let element = self.root.find_by_id_mut(target);
        if element.is_none() {
            tracing::warn!(target_id = target, "page element not found");
        }
        element
    }
}

impl Page for Document {
    fn location(&self) -> &Route {
        &self.location
    }

    fn mount(&mut self, target: &str, content: Vec<Node>) {
        if let Some(element) = self.target_mut(target) {
            element.children = content;
        }
    }

    fn set_text(&mut self, target: &str, text: &str) {
        if let Some(element) = self.target_mut(target) {
            element.children = vec![Node::text(text)];
        }
    }

    fn set_disabled(&mut self, target: &str, disabled: bool) {
        if let Some(element) = self.target_mut(target) {
            if disabled {
                element.set_attr("disabled", "");
            } else {
                element.remove_attr("disabled");
            }
        }
    }

    fn set_hidden(&mut self, target: &str, hidden: bool) {
        if let Some(element) = self.target_mut(target) {
            element.set_hidden(hidden);
        }
    }

    fn reset_form(&mut self, target: &str) {
        if let Some(form) = self.target_mut(target) {
            form.for_each_mut(&mut |element| match element.tag.as_str() {
                "input" => element.remove_attr("value"),
                "textarea" => element.children.clear(),
                "option" => element.remove_attr("selected"),
                _ => {}
            });
        }
    }

    fn alert(&mut self, message: &str) {
        tracing::info!(alert = message, "alert raised");
        self.alerts.push(message.to_string());
    }

    fn navigate(&mut self, route: Route) {
        self.navigation = Some(Navigation::Goto(route));
    }

    fn reload(&mut self) {
        self.navigation = Some(Navigation::Reload);
    }
}
