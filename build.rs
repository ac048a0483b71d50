// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Report cards embed the build they were produced by.
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .build_date()
        .emit()?;
    Ok(())
}
