//! The plain-text deployment guide shipped alongside every generated site.
//!
//! The text is the same for every business: it only names the three site
//! files, never any user data.

use crate::artifacts::{INDEX_HTML, MENU_JSON, STYLES_CSS};

/// Deployment guide for drag-and-drop static hosts.
pub fn deployment_instructions() -> String {
    let files = format!("{INDEX_HTML}, {STYLES_CSS}, {MENU_JSON}");
    format!(
        r#"DEPLOYMENT INSTRUCTIONS
=======================

Congratulations! Your website has been generated successfully!

You now have three files:
- {INDEX_HTML} (your landing page)
- {STYLES_CSS} (your website styling)
- {MENU_JSON} (your menu data)

These files work together to create your complete website.


HOW TO DEPLOY YOUR WEBSITE
==========================

Option 1: Netlify (recommended, easiest)
----------------------------------------
1. Go to https://app.netlify.com/drop
2. Drag and drop ALL THREE FILES ({files})
   into the upload area on the page
3. Wait a few seconds for the upload to complete
4. Netlify gives you a free website URL that looks like:
   https://your-site-name.netlify.app
5. Share this URL with your customers!

You can change the site name in the Netlify settings to make it easier
to remember.


Option 2: GitHub Pages (free forever)
-------------------------------------
1. Create a free GitHub account at https://github.com
2. Click the "+" button in the top right and select "New repository"
3. Name your repository (example: my-business-website)
4. Make sure it is set to "Public"
5. Click "Create repository"
6. Click "uploading an existing file"
7. Drag and drop all three files ({files})
8. Click "Commit changes"
9. Go to your repository Settings > Pages
10. Under "Source", select the "main" branch and click Save
11. Your website will be live at:
    https://your-username.github.io/repository-name

It may take a few minutes for your site to appear online.


Option 3: Other free hosting services
-------------------------------------
Vercel (https://vercel.com), Cloudflare Pages (https://pages.cloudflare.com)
and Firebase Hosting (https://firebase.google.com) all host static sites for
free. Create a project, upload your three files, and you get a public URL.


UPDATING YOUR WEBSITE
=====================
1. Go back to the website builder
2. Make your changes (update prices, add new items, etc.)
3. Generate the website again
4. Upload the new files to your hosting service
   (they replace the old ones automatically)


IMPORTANT TIPS
==============
- Always upload ALL THREE files together ({files})
- Keep the filenames exactly as they are; don't rename them
- Upload to the root folder, not inside a subfolder
- If your website doesn't look right, try clearing your browser cache


TROUBLESHOOTING
===============
Problem: My website looks plain (no colors or styling)
Solution: Make sure you uploaded {STYLES_CSS} along with {INDEX_HTML}

Problem: My website shows "file not found" errors
Solution: Check that all three files are in the same folder on your hosting

Problem: Changes don't appear after updating
Solution: Clear your browser cache or open the site in a private window


Thank you for using the website builder!
"#
    )
}
