mod attachment;
mod calendar_event;
mod communication;
mod contact;
mod resource;
mod user;
