/// Errors gathered while walking a struct, so one expansion reports every
/// bad attribute instead of stopping at the first.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    combined: Option<syn::Error>,
}

impl Diagnostics {
    pub(crate) fn push(&mut self, err: syn::Error) {
        match &mut self.combined {
            Some(combined) => combined.combine(err),
            None => self.combined = Some(err),
        }
    }

    /// Keeps the value of `result`, or records its error.
    pub(crate) fn take<T>(&mut self, result: syn::Result<T>) -> Option<T> {
        result.map_err(|err| self.push(err)).ok()
    }

    pub(crate) fn finish(self) -> syn::Result<()> {
        self.combined.map_or(Ok(()), Err)
    }
}
