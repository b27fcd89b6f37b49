//! Messages of the `fieldmask.tests` protobuf package, generated by `prost-build` with
//! `fieldmask::Instance` derived alongside `prost::Message`.
include!(concat!(env!("OUT_DIR"), "/fieldmask.tests.rs"));
