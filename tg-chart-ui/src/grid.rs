//! The grid a page drives: one controller and the resize hub feeding it.
//!
//! Components hold a cloned `GridHandle` from context. Every mutating call
//! returns the freshly rendered SVG, or `None` while there is nothing to
//! draw (data still loading, load failed, or no size reported yet).

use std::cell::RefCell;
use std::rc::Rc;
use tg_core::TgError;
use tg_data::Dataset;
use tg_render::{
    Controller, GridConfig, LoadState, ResizeHub, Size, Subscription, TooltipPresenter, ViewMode,
};

pub struct GridHandle<P: TooltipPresenter> {
    controller: Rc<RefCell<Controller<P>>>,
    hub: Rc<ResizeHub>,
}

impl<P: TooltipPresenter> Clone for GridHandle<P> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            hub: self.hub.clone(),
        }
    }
}

impl<P: TooltipPresenter> PartialEq for GridHandle<P> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}

impl<P: TooltipPresenter + 'static> GridHandle<P> {
    pub fn new(config: GridConfig, presenter: P) -> Self {
        Self {
            controller: Rc::new(RefCell::new(Controller::new(config, presenter))),
            hub: ResizeHub::new(),
        }
    }

    /// Connect the controller to the resize hub. Drop the subscription on
    /// unmount so a torn-down grid stops rendering.
    pub fn mount(&self) -> Subscription {
        Controller::mount(&self.controller, &self.hub)
    }

    pub fn config(&self) -> GridConfig {
        self.controller.borrow().config().clone()
    }

    pub fn finish_loading(&self, result: Result<Dataset, TgError>) -> Option<String> {
        self.controller.borrow_mut().finish_loading(result);
        self.svg()
    }

    pub fn load_state(&self) -> LoadState {
        self.controller.borrow().load_state().clone()
    }

    /// Publish a new surface size to every subscriber.
    pub fn resize(&self, width: f64, height: f64) -> Option<String> {
        self.hub.publish(Size::new(width, height));
        self.svg()
    }

    pub fn toggle_mode(&self) -> (ViewMode, Option<String>) {
        let mode = self.controller.borrow_mut().toggle_mode();
        (mode, self.svg())
    }

    pub fn pointer_move(&self, x: f64, y: f64) {
        self.controller.borrow_mut().pointer_move(x, y);
    }

    pub fn pointer_leave(&self) {
        self.controller.borrow_mut().pointer_leave();
    }

    pub fn svg(&self) -> Option<String> {
        self.controller.borrow().scene().map(|scene| scene.to_svg())
    }
}
