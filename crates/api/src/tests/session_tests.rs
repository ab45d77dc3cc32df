// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::cell::RefCell;
use std::rc::Rc;

use crate::tests::helpers::{create_test_customer, create_test_manager, create_test_venue};
use crate::{
    AuthenticatedUser, EligibilityContext, Role, SessionHub, SessionSnapshot, SubscriptionId,
};
use holidaze_domain::Venue;

#[test]
fn test_observers_see_sign_in_and_sign_out() {
    let seen: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
    let sink: Rc<RefCell<Vec<bool>>> = Rc::clone(&seen);

    let mut hub: SessionHub = SessionHub::new();
    hub.subscribe(move |snapshot: &SessionSnapshot| {
        sink.borrow_mut().push(snapshot.is_authenticated());
    });

    hub.sign_in(create_test_customer());
    hub.sign_out();

    assert_eq!(*seen.borrow(), vec![true, false]);
}

#[test]
fn test_sign_out_when_anonymous_does_not_notify() {
    let count: Rc<RefCell<u32>> = Rc::new(RefCell::new(0));
    let sink: Rc<RefCell<u32>> = Rc::clone(&count);

    let mut hub: SessionHub = SessionHub::new();
    hub.subscribe(move |_: &SessionSnapshot| *sink.borrow_mut() += 1);
    hub.sign_out();

    assert_eq!(*count.borrow(), 0);
}

#[test]
fn test_unsubscribed_observer_is_not_called() {
    let count: Rc<RefCell<u32>> = Rc::new(RefCell::new(0));
    let sink: Rc<RefCell<u32>> = Rc::clone(&count);

    let mut hub: SessionHub = SessionHub::new();
    let id: SubscriptionId = hub.subscribe(move |_: &SessionSnapshot| *sink.borrow_mut() += 1);

    assert!(hub.unsubscribe(id));
    assert!(!hub.unsubscribe(id));
    hub.sign_in(create_test_customer());

    assert_eq!(*count.borrow(), 0);
    assert!(hub.snapshot().is_authenticated());
}

#[test]
fn test_context_follows_the_session() {
    let venue: Venue = create_test_venue();
    let mut hub: SessionHub = SessionHub::new();

    assert_eq!(
        EligibilityContext::for_venue(hub.snapshot(), &venue),
        EligibilityContext::anonymous()
    );

    hub.sign_in(create_test_manager());
    let context: EligibilityContext = EligibilityContext::for_venue(hub.snapshot(), &venue);
    assert!(context.is_authenticated);
    assert_eq!(context.account_role, Role::Manager);
    assert!(context.is_owner_of_venue);
    assert!(context.is_self_booking());
}

#[test]
fn test_customer_named_like_owner_is_not_self_booking() {
    let venue: Venue = create_test_venue();
    let mut customer: AuthenticatedUser = create_test_customer();
    customer.name = String::from("ola");

    let context: EligibilityContext =
        EligibilityContext::for_venue(&SessionSnapshot::signed_in(customer), &venue);

    assert!(context.is_owner_of_venue);
    assert!(!context.is_self_booking());
}
