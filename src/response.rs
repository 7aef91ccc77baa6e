use std::io::{Read, Seek};

use expect_graphql::{GraphQLResponse, ResponseAssertions};
use expect_http::HttpResponse;
use serde::{Serialize, de::DeserializeOwned};

use crate::{Failure, error::settle};

/// A response that assertions can be chained against.
///
/// The response is borrowed mutably so its body can be read and rewound; once
/// the chain is done the caller can read the body again from its start.
#[derive(Debug)]
pub struct ResponseExpectation<'r, B> {
    response: &'r mut HttpResponse<B>,
    assertions: ResponseAssertions,
    negated: bool,
}

impl<'r, B> ResponseExpectation<'r, B>
where
    B: Read + Seek,
{
    pub(crate) fn new(
        response: &'r mut HttpResponse<B>,
        assertions: ResponseAssertions,
    ) -> ResponseExpectation<'r, B> {
        ResponseExpectation {
            response,
            assertions,
            negated: false,
        }
    }

    /// Inverts the next assertion only.
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    pub fn is_graphql_response(self) -> Result<Self, Failure> {
        let outcome = self.assertions.is_graphql_response(&mut *self.response);
        self.settle("is_graphql_response".to_string(), outcome)
    }

    pub fn has_data<T>(self, expected: &T) -> Result<Self, Failure>
    where
        T: Serialize + ?Sized,
    {
        let outcome = self.assertions.has_data(&mut *self.response, expected);
        self.settle("has_data".to_string(), outcome)
    }

    pub fn has_errors<T>(self, expected: &T) -> Result<Self, Failure>
    where
        T: Serialize + ?Sized,
    {
        let outcome = self.assertions.has_errors(&mut *self.response, expected);
        self.settle("has_errors".to_string(), outcome)
    }

    pub fn has_path(self, path: &str) -> Result<Self, Failure> {
        let outcome = self.assertions.has_path(&mut *self.response, path);
        self.settle(format!("has_path '{path}'"), outcome)
    }

    pub fn has_path_value<T>(self, path: &str, expected: &T) -> Result<Self, Failure>
    where
        T: Serialize + ?Sized,
    {
        let outcome = self.assertions.has_path_value(&mut *self.response, path, expected);
        self.settle(format!("has_path_value '{path}'"), outcome)
    }

    /// Decodes the body into a typed [`GraphQLResponse`] after checking the envelope.
    pub fn decode<T>(&mut self) -> Result<GraphQLResponse<T>, Failure>
    where
        T: DeserializeOwned,
    {
        Ok(self.assertions.decode(&mut *self.response)?)
    }

    /// Ends the chain, handing the response back.
    pub fn into_inner(self) -> &'r mut HttpResponse<B> {
        self.response
    }

    fn settle<E>(mut self, assertion: String, outcome: Result<(), E>) -> Result<Self, Failure>
    where
        Failure: From<E>,
    {
        let negated = std::mem::take(&mut self.negated);
        settle(negated, &assertion, outcome.map_err(Failure::from))?;
        Ok(self)
    }
}
